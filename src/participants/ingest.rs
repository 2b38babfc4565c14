use crate::map::models::LatLng;
use crate::participants::consts::EXPECTED_COLUMNS;
use crate::participants::errors::IngestError;
use crate::participants::models::ParticipantRow;
use csv::{Position, ReaderBuilder, StringRecord};
use std::io;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a `name,coordinates` CSV into validated rows, in file order.
///
/// Data rows come in two shapes: `name,lat,lon` where the coordinates cell was written without
/// quotes (so its comma splits it into two fields), and `name,"lat, lon"`. Either the whole
/// input is accepted or the first offending record is reported.
pub fn parse_participants<R: io::Read>(reader: R) -> Result<Vec<ParticipantRow>, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let header = match records.next() {
        None => return Ok(Vec::new()),
        Some(header) => header.map_err(unreadable)?,
    };
    check_header(&header)?;

    records
        .map(|record| record.map_err(unreadable).and_then(|record| parse_row(&record)))
        .collect()
}

fn check_header(header: &StringRecord) -> Result<(), IngestError> {
    let found = header
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let column = if index == 0 {
                column.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                column
            };
            column.trim().to_string()
        })
        .collect::<Vec<_>>();
    if found.iter().map(String::as_str).eq(EXPECTED_COLUMNS) {
        Ok(())
    } else {
        Err(IngestError::Schema { found })
    }
}

fn parse_row(record: &StringRecord) -> Result<ParticipantRow, IngestError> {
    let line = record.position().map_or(0, Position::line);
    let (latitude, longitude, raw_coordinates) = match record.len() {
        2 => {
            let cell = &record[1];
            match cell.split_once(',') {
                Some((latitude, longitude)) if !longitude.contains(',') => {
                    (latitude, longitude, cell.to_string())
                }
                _ => {
                    return Err(IngestError::Format {
                        line,
                        reason: format!(
                            "expected `latitude, longitude` in the coordinates cell, got `{cell}`"
                        ),
                    })
                }
            }
        }
        3 => (&record[1], &record[2], format!("{},{}", &record[1], &record[2])),
        fields_count => {
            return Err(IngestError::Format {
                line,
                reason: format!(
                    "expected a name followed by a latitude and a longitude, got {fields_count} \
                    fields"
                ),
            })
        }
    };

    let position = LatLng::new(
        parse_coordinate(latitude, "latitude", line)?,
        parse_coordinate(longitude, "longitude", line)?,
    );
    if !position.is_valid() {
        return Err(IngestError::Range {
            line,
            latitude: position.lat,
            longitude: position.lng,
        });
    }

    Ok(ParticipantRow {
        name: record[0].to_string(),
        raw_coordinates,
        position,
    })
}

fn parse_coordinate(value: &str, axis: &str, line: u64) -> Result<f64, IngestError> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(IngestError::Format {
            line,
            reason: format!("{axis} `{value}` is not a number"),
        }),
    }
}

fn unreadable(error: csv::Error) -> IngestError {
    IngestError::Format {
        line: error.position().map_or(0, Position::line),
        reason: error.to_string(),
    }
}
