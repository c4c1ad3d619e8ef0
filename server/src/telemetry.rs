// giftlist/server/src/telemetry.rs

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: INFO by default, `RUST_LOG` overrides,
/// `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  let json = std::env::var("LOG_FORMAT").map(|f| f.eq_ignore_ascii_case("json")).unwrap_or(false);
  let result = if json {
    builder.json().try_init()
  } else {
    builder.try_init()
  };
  if let Err(e) = result {
    eprintln!("tracing subscriber already installed: {e}");
  }
}
