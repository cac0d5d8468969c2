use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use super::decode::{decode_image, DecodedImage};
use crate::error::GlimpseError;

/// A finished load for one slot.
pub type LoadResult = (usize, Result<DecodedImage, GlimpseError>);

/// A job that reads and decodes one image.
type LoadJob = Box<dyn FnOnce() + Send + 'static>;

/// Read and decode every path on its own thread.
///
/// Each result is tagged with the index of its path in `paths` and sent as
/// soon as it is ready, so results arrive in completion order.
pub fn spawn_file_loads(paths: &[PathBuf]) -> Receiver<LoadResult> {
    spawn_loads_with(paths, |name, job| {
        std::thread::Builder::new().name(name).spawn(job).map(drop)
    })
}

/// Hand one load job per path to `spawn`.
///
/// A job that cannot be spawned still reports its slot as an I/O error.
fn spawn_loads_with<S>(paths: &[PathBuf], spawn: S) -> Receiver<LoadResult>
where
    S: Fn(String, LoadJob) -> io::Result<()>,
{
    let (tx, rx) = mpsc::channel();
    for (index, path) in paths.iter().enumerate() {
        let thread_tx = tx.clone();
        let path = path.clone();
        let job: LoadJob = Box::new(move || {
            let result = std::fs::read(&path)
                .map_err(GlimpseError::Io)
                .and_then(|bytes| decode_image(index, &bytes));
            if let Err(e) = &result {
                log::debug!("loading {}: {e}", path.display());
            }
            // The receiver may be gone if the viewer already closed.
            let _ = thread_tx.send((index, result));
        });
        if let Err(e) = spawn(format!("image-load-{index}"), job) {
            log::warn!("could not start load for image {index}: {e}");
            let _ = tx.send((index, Err(GlimpseError::Io(e))));
        }
    }
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::decode::tests::png_bytes;

    #[test]
    fn every_path_reports_once_with_its_index() {
        let dir = std::env::temp_dir().join("glimpse-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.png");
        std::fs::write(&good, png_bytes(2, 2, [1, 2, 3, 255])).unwrap();
        let missing = dir.join("missing.png");

        let rx = spawn_file_loads(&[missing, good]);
        let mut results: Vec<LoadResult> = rx.iter().collect();
        results.sort_by_key(|(index, _)| *index);

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0].1, Err(GlimpseError::Io(_))));
        let image = results[1].1.as_ref().unwrap();
        assert_eq!((image.width, image.height), (2, 2));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_spawn_still_reports_its_slot() {
        let paths = [PathBuf::from("a.png"), PathBuf::from("b.png")];
        let rx = spawn_loads_with(&paths, |_, _| {
            Err(io::Error::new(io::ErrorKind::WouldBlock, "no threads"))
        });
        let results: Vec<LoadResult> = rx.iter().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], (0, Err(GlimpseError::Io(_)))));
        assert!(matches!(results[1], (1, Err(GlimpseError::Io(_)))));
    }
}
