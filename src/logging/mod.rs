use crate::cli::Args;
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

pub fn init(args: &Args) {
    let quickwit_logging_layer = args.quickwit_url.clone().map(|quickwit_url| {
        consts::QUICKWIT_MARKER_INDEXES
            .iter()
            .fold(
                QuickwitLoggingLayerBuilder::new(quickwit_url).marker_field("task"),
                |builder, (marker_value, index_id)| {
                    builder.map_marker_to_index(marker_value, index_id)
                },
            )
            .with_batch_size(consts::DEFAULT_LOGGING_BUFFER_SIZE)
            .build()
    });
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("giveaway_server=info,tower_http=warn"));
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
    if let Some(quickwit_url) = &args.quickwit_url {
        tracing::info!("Shipping logs to Quickwit at {}.", quickwit_url);
    }
}
