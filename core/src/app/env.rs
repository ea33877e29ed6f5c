use std::path::PathBuf;

/// Loads the nearest `.env` file (searching the current directory and its ancestors) into the process environment.
/// Variables that are already set are not overridden.
///
/// Returns the path of the loaded file, or `None` when there is no `.env` file; a missing file is not an error.
pub fn load_dotenv_into_env() -> Result<Option<PathBuf>, dotenvy::Error> {
  match dotenvy::dotenv() {
    Ok(path) => Ok(Some(path)),
    Err(e) if e.not_found() => Ok(None),
    Err(e) => Err(e),
  }
}

