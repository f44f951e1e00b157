use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::store::Workbook;
use crate::store::audit::ttlog;
use crate::store::sheet::SheetSession;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store to `dest_file`.
    ///
    /// The file backend is copied as-is (zipped with `compress`); the sheet
    /// backend is always archived as a zip of its tab files.
    /// Returns the written path, `None` when the user declined to overwrite.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        let (sources, zipped) = match cfg.backend {
            Backend::File => {
                let src = cfg.data_path();
                if !src.exists() {
                    return Err(AppError::StoreUnavailable(format!(
                        "data file not found: {}",
                        src.display()
                    )));
                }
                (vec![src], compress)
            }
            Backend::Sheet => {
                let session = SheetSession::establish(&cfg.credentials_path())?;
                let wb = Workbook::open(&session, &cfg.workbook_path())?;
                let tabs = wb.tab_files();
                if tabs.is_empty() {
                    return Err(AppError::StoreUnavailable(format!(
                        "no tabs found in workbook {}",
                        wb.dir().display()
                    )));
                }
                (tabs, true)
            }
        };

        let final_path = if zipped {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path.exists()
            && !force
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_path.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if zipped {
            compress_files(&sources, &final_path)?;
        } else {
            fs::copy(&sources[0], &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        ttlog(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if zipped {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Write every file of `sources` into a deflated zip at `zip_path`.
fn compress_files(sources: &[PathBuf], zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other(format!("invalid file name: {}", src.display())))?;

        let mut f = fs::File::open(src)?;
        zip.start_file(name, options)
            .map_err(std::io::Error::other)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
