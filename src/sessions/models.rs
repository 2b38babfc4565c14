use crate::participants::models::{Participant, Winner};
use crate::participants::ranking::select_winner;
use crate::sessions::errors::{DrawError, StateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// The views a session moves through. Later pages need the data produced on earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Upload,
    Map,
    Winner,
}

impl Page {
    pub fn missing_data_hint(&self) -> &'static str {
        match self {
            Page::Upload => "",
            Page::Map => "No data available. Please upload a CSV first.",
            Page::Winner => "No winner data available. Please draw a winner first.",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Upload => "upload",
            Page::Map => "map",
            Page::Winner => "winner",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub participants: Option<Vec<Participant>>,
    pub winner: Option<Winner>,
    pub page: Page,
    pub last_active: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            participants: None,
            winner: None,
            page: Page::Upload,
            last_active: Instant::now(),
        }
    }
}

impl Session {
    /// Replaces the participants wholesale. Any previous winner belongs to the old data.
    pub fn load_participants(&mut self, participants: Vec<Participant>) {
        self.participants = Some(participants);
        self.winner = None;
        self.page = Page::Map;
    }

    pub fn draw_winner(&mut self) -> Result<Winner, DrawError> {
        let Some(participants) = &self.participants else {
            return Err(self.redirect(Page::Winner).into());
        };
        let (index, participant) = select_winner(participants)?;
        let winner = Winner {
            index,
            participant: participant.clone(),
        };
        self.winner = Some(winner.clone());
        self.page = Page::Winner;
        Ok(winner)
    }

    pub fn can_show(&self, page: Page) -> bool {
        match page {
            Page::Upload => true,
            Page::Map => self.participants.is_some(),
            Page::Winner => self.participants.is_some() && self.winner.is_some(),
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn navigate(&mut self, requested: Page) -> Result<Page, StateError> {
        if self.can_show(requested) {
            self.page = requested;
            Ok(requested)
        } else {
            Err(self.redirect(requested))
        }
    }

    /// Sends the session back to the upload page, the one page that needs no data.
    pub fn redirect(&mut self, requested: Page) -> StateError {
        self.page = Page::Upload;
        StateError {
            requested,
            redirected_to: self.page,
        }
    }
}
