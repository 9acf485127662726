use parquet::{
    arrow::ArrowWriter,
    basic::{BrotliLevel, Compression},
    file::properties::WriterProperties,
};
use std::{
    fs::{self, File},
    path::Path,
};
use tracing::{info, warn};

use arrow::record_batch::RecordBatch;

use crate::error::Result;

/// Write `batch` to a Parquet file at `path`, returning the file size in bytes.
///
/// The file is written next to `path` under a dot-prefixed temporary name and
/// renamed over the target once the writer is closed.
pub fn write_parquet<P: AsRef<Path>>(batch: &RecordBatch, path: P) -> Result<u64> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export.parquet".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let props = WriterProperties::builder()
        .set_compression(Compression::BROTLI(BrotliLevel::try_new(5)?))
        .build();

    let written = write_to(&tmp_path, batch, props)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(Into::into));
    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            warn!(
                path = %tmp_path.display(),
                error = %rm,
                "failed to remove temporary parquet file"
            );
        }
        return Err(e);
    }
    let bytes = fs::metadata(path)?.len();
    info!(path = %path.display(), rows = batch.num_rows(), bytes, "wrote parquet");
    Ok(bytes)
}

fn write_to(path: &Path, batch: &RecordBatch, props: WriterProperties) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}
