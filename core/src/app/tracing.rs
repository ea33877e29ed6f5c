use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable the console filter is read from when no filter is set explicitly.
pub const CONSOLE_LOG_ENV: &str = "CONSOLE_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  console_filter_env: Option<&'static str>,
  without_ansi: bool,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
  pub fn with_console_filter_env(mut self, env: &'static str) -> Self {
    self.console_filter_env = Some(env);
    self
  }
  pub fn without_ansi(mut self) -> Self {
    self.without_ansi = true;
    self
  }

  fn console_filter(&mut self) -> EnvFilter {
    self.console_filter.take().unwrap_or_else(|| {
      EnvFilter::try_from_env(self.console_filter_env.unwrap_or(CONSOLE_LOG_ENV)).unwrap_or_default()
    })
  }

  /// Installs a global subscriber that writes to stderr, filtered by the console filter.
  ///
  /// Fails if a global subscriber was already installed.
  pub fn build(mut self) -> Result<AppTracing, TryInitError> {
    let console_filter = self.console_filter();
    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(io::stderr)
          .with_ansi(!self.without_ansi)
          .with_filter(console_filter)
      )
      .try_init()?;
    Ok(AppTracing { _private: () })
  }
}

/// Proof that application tracing was installed.
pub struct AppTracing {
  _private: (),
}
