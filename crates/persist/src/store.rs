//! File-backed world documents.
//!
//! The stitch job reads one JSON document and writes the stitched result to a
//! second path, pretty-printed:
//! ```text
//! world.json          - input, never modified
//! world_updated.json  - output, overwritten on every run
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tilestitch_kernel::World;
use tracing::debug;

/// Default input document name.
pub const DEFAULT_INPUT: &str = "world.json";
/// Default output document name.
pub const DEFAULT_OUTPUT: &str = "world_updated.json";

/// Errors from reading or writing a world document.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed world document {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read and parse a world document.
pub fn load_world(path: impl AsRef<Path>) -> Result<World, PersistError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PersistError::io(path, e))?;
    let world: World =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| PersistError::json(path, e))?;
    debug!(path = %path.display(), rooms = world.room_count(), "loaded world");
    Ok(world)
}

/// Write a world document, pretty-printed, replacing any existing file.
pub fn save_world(path: impl AsRef<Path>, world: &World) -> Result<(), PersistError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PersistError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, world).map_err(|e| PersistError::json(path, e))?;
    writer.flush().map_err(|e| PersistError::io(path, e))?;
    debug!(path = %path.display(), rooms = world.room_count(), "saved world");
    Ok(())
}

/// An input/output document pair for one stitch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldFile {
    input: PathBuf,
    output: PathBuf,
}

impl Default for WorldFile {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl WorldFile {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn load(&self) -> Result<World, PersistError> {
        load_world(&self.input)
    }

    pub fn save(&self, world: &World) -> Result<(), PersistError> {
        save_world(&self.output, world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tilestitch_common::{Direction, RoomCoord};

    fn write_json(path: &Path, value: &Value) {
        std::fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
    }

    #[test]
    fn default_paths() {
        let file = WorldFile::default();
        assert_eq!(file.input(), Path::new("world.json"));
        assert_eq!(file.output(), Path::new("world_updated.json"));
    }

    #[test]
    fn load_stitch_save_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let file = WorldFile::new(tmp.path().join("in.json"), tmp.path().join("out.json"));
        write_json(
            file.input(),
            &json!({
                "title": "meadow",
                "rooms": {
                    "0,0": { "width": 2, "height": 1 },
                    "1,0": { "width": 2, "height": 1 }
                }
            }),
        );

        let mut world = file.load().unwrap();
        world.stitch();
        file.save(&world).unwrap();

        let text = std::fs::read_to_string(file.output()).unwrap();
        assert!(text.contains('\n'), "output should be pretty-printed");
        let out: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(out["title"], "meadow");
        assert_eq!(
            out["rooms"]["0,0"]["tiles"][0][1]["tileExits"]["right"],
            json!({ "roomX": 1, "roomY": 0, "x": 0, "y": 0 })
        );

        let reloaded = load_world(file.output()).unwrap();
        assert_eq!(reloaded, world);
        assert!(
            reloaded
                .room(RoomCoord::new(1, 0))
                .and_then(|r| r.tile(0, 0))
                .is_some_and(|t| t.has_exit(Direction::Left))
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("world.json");
        let original = json!({ "rooms": { "0,0": { "width": 1, "height": 1 } } });
        write_json(&input, &original);

        let mut world = load_world(&input).unwrap();
        world.stitch();
        save_world(tmp.path().join("world_updated.json"), &world).unwrap();

        let still: Value = serde_json::from_slice(&std::fs::read(&input).unwrap()).unwrap();
        assert_eq!(still, original);
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_world(tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_documents_are_json_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let cases = [
            json!({ "name": "no rooms" }),
            json!({ "rooms": { "1;2": { "width": 1, "height": 1 } } }),
            json!({ "rooms": { "1,2": { "height": 1 } } }),
            json!({ "rooms": { "1,2": { "width": 1, "height": -3 } } }),
        ];
        for (i, doc) in cases.iter().enumerate() {
            let path = tmp.path().join(format!("bad{i}.json"));
            write_json(&path, doc);
            let err = load_world(&path).unwrap_err();
            assert!(matches!(err, PersistError::Json { .. }), "case {i}: {err}");
        }
    }
}
