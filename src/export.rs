use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder, Int64Array, ListBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::info;
use parquet::arrow::ArrowWriter;

use crate::data::model::{HarData, CHANNELS};
use crate::error::{HarError, Result};

/// Schema of an exported split: `window`, one list column per channel,
/// `label`.
pub fn export_schema() -> Schema {
    let mut fields = vec![Field::new("window", DataType::Int64, false)];
    for ch in CHANNELS {
        fields.push(Field::new(
            ch.name(),
            DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
            false,
        ));
    }
    fields.push(Field::new("label", DataType::Int64, false));
    Schema::new(fields)
}

/// Build one record batch with a row per window.
pub fn to_record_batch(data: &HarData) -> Result<RecordBatch> {
    let (windows, timesteps, _) = data.features.dim();
    if data.labels.len() != windows {
        return Err(HarError::WindowCountMismatch {
            windows,
            labels: data.labels.len(),
        });
    }

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(CHANNELS.len() + 2);
    columns.push(Arc::new(Int64Array::from_iter_values(0..windows as i64)));

    for ch in CHANNELS {
        let mut builder =
            ListBuilder::with_capacity(Float64Builder::with_capacity(windows * timesteps), windows);
        for w in 0..windows {
            let lane = data.features.slice(ndarray::s![w, .., ch.index()]);
            builder.values().append_slice(&lane.to_vec());
            builder.append(true);
        }
        columns.push(Arc::new(builder.finish()));
    }

    columns.push(Arc::new(Int64Array::from(data.labels.decode().to_vec())));

    Ok(RecordBatch::try_new(Arc::new(export_schema()), columns)?)
}

/// Write `data` as Parquet into `writer`.
pub fn write_parquet<W: Write + Send>(data: &HarData, writer: W) -> Result<()> {
    let batch = to_record_batch(data)?;
    let mut writer = ArrowWriter::try_new(writer, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

/// Write `data` to a `.parquet` file at `path`.
pub fn export_parquet(data: &HarData, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| HarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_parquet(data, file)?;
    info!(
        "wrote {} windows ({} timesteps each) to {}",
        data.num_windows(),
        data.num_timesteps(),
        path.display()
    );
    Ok(())
}
