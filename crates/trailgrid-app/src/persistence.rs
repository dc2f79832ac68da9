//! Saving and resuming games as JSON files.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::Path,
};

use trailgrid_game::GameSnapshot;

use crate::AppError;

/// Reads a saved game, returning `None` if the file does not exist.
pub(crate) fn load_snapshot(path: &Path) -> Result<Option<GameSnapshot>, AppError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let snapshot = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("loaded saved game from {}", path.display());
    Ok(Some(snapshot))
}

/// Writes `snapshot` to `path`, replacing any previous save.
pub(crate) fn save_snapshot(path: &Path, snapshot: &GameSnapshot) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::debug!("saved game to {}", path.display());
    Ok(())
}
