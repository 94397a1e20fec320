use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

use glyphcut::{sprite::FrameSink, CutError, Result};
use image::RgbaImage;

/// Writes frames as PNG files below a directory.
///
/// Frame names may contain sub directories (`./` segments are ignored) but
/// must stay inside the output directory. Names without a `.png` extension get
/// one appended, so `x` and `x.png` name the same file; the later frame is
/// refused instead of overwriting the earlier one.
pub struct DirFrameSink {
    dir: PathBuf,
    written: HashSet<PathBuf>,
}

impl DirFrameSink {
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: HashSet::new(),
        })
    }

    fn frame_path(&self, name: &str) -> Result<PathBuf> {
        let invalid = |reason: &str| CutError::InvalidFrameName {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        let mut rel = PathBuf::new();
        for component in Path::new(name).components() {
            match component {
                Component::Normal(part) => rel.push(part),
                Component::CurDir => {}
                _ => return Err(invalid("name escapes the output directory")),
            }
        }
        if rel.as_os_str().is_empty() {
            return Err(invalid("name has no file component"));
        }
        let mut path = self.dir.join(rel);
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            let mut file = path.as_os_str().to_owned();
            file.push(".png");
            path = PathBuf::from(file);
        }
        if self.written.contains(&path) {
            return Err(invalid("file already written by an earlier frame"));
        }
        Ok(path)
    }
}

impl FrameSink for DirFrameSink {
    fn write_frame(&mut self, name: &str, image: RgbaImage) -> Result<()> {
        let path = self.frame_path(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        image.save(&path)?;
        log::info!("saved {}", path.display());
        self.written.insert(path);
        Ok(())
    }
}
