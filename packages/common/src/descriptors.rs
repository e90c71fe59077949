use crate::error::{CommonError, CommonResult};
use crate::filesystem::FileSystem;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use tsmodel_generator::{GeneratedModule, TypeDescriptor};

/// Parse descriptor file contents.
///
/// A file holds either one descriptor or an array of them; the first
/// non-whitespace character decides which, so serde's error keeps its
/// line and column.
pub fn parse_descriptors(source: &str) -> CommonResult<Vec<TypeDescriptor>> {
    if source.trim_start().starts_with('[') {
        Ok(serde_json::from_str(source)?)
    } else {
        Ok(vec![serde_json::from_str(source)?])
    }
}

/// Load every `*.json` descriptor file under `dir`, in path order
pub fn load_descriptors(fs: &dyn FileSystem, dir: &Path) -> CommonResult<Vec<TypeDescriptor>> {
    let mut descriptors = Vec::new();

    for path in fs.list_files(dir, "json")? {
        let source = fs.read_to_string(&path)?;
        let parsed = parse_descriptors(&source)
            .map_err(|e| CommonError::from(format!("{}: {}", path.display(), e)))?;
        debug!("loaded {} descriptors from {}", parsed.len(), path.display());
        descriptors.extend(parsed);
    }

    Ok(descriptors)
}

/// Write generated modules below `out_dir`, returning the written paths.
///
/// Module file names must be relative and stay inside `out_dir`.
pub fn write_modules(
    fs: &dyn FileSystem,
    out_dir: &Path,
    modules: &[GeneratedModule],
) -> CommonResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(modules.len());

    for module in modules {
        let relative = Path::new(&module.file_name);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(format!(
                "module file name '{}' escapes the output directory",
                module.file_name
            )
            .into());
        }

        let path = out_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write(&path, &module.contents)?;
        written.push(path);
    }

    Ok(written)
}
