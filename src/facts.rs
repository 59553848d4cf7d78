//! Solver input: one `cube(...)` fact per cell of every piece orientation.
//!
//! ```text
//! % I tetracube
//! % Rotation 1
//! cube("I", 1, 0, 0, 0). cube("I", 1, 0, 0, 1). cube("I", 1, 0, 0, 2). cube("I", 1, 0, 0, 3).
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use flate2::write::GzEncoder;

use crate::{
    pieces::{PieceTable, TetracubeType},
    shape::Shape,
};

/// Compression types supported for written fact files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

pub enum Writer<T>
where
    T: Write,
{
    Uncompressed(T),
    Gzip(GzEncoder<T>),
}

impl<T> Writer<T>
where
    T: Write,
{
    pub fn new(compression: Compression, writer: T) -> Self {
        match compression {
            Compression::None => Self::Uncompressed(writer),
            Compression::Gzip => Self::Gzip(GzEncoder::new(writer, flate2::Compression::default())),
        }
    }

    /// Write any trailing compression data and return the inner writer.
    pub fn finish(self) -> std::io::Result<T> {
        match self {
            Writer::Uncompressed(mut t) => {
                t.flush()?;
                Ok(t)
            }
            Writer::Gzip(t) => t.finish(),
        }
    }
}

impl<T> Write for Writer<T>
where
    T: Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Writer::Uncompressed(t) => t.write(buf),
            Writer::Gzip(t) => t.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Writer::Uncompressed(t) => t.flush(),
            Writer::Gzip(t) => t.flush(),
        }
    }
}

/// The facts for one orientation, each followed by a space.
pub fn fact_line(ty: TetracubeType, rotation_id: usize, shape: &Shape) -> String {
    let name = ty.name();
    shape
        .cells()
        .iter()
        .map(|c| format!("cube(\"{name}\", {rotation_id}, {}, {}, {}). ", c.x, c.y, c.z))
        .collect()
}

/// Write the block of facts for every orientation of `ty`.
pub fn write_type_facts<W: Write>(
    out: &mut W,
    ty: TetracubeType,
    orientations: &[Shape],
) -> std::io::Result<()> {
    writeln!(out, "% {ty} tetracube")?;

    for (i, shape) in orientations.iter().enumerate() {
        let rotation_id = i + 1;
        writeln!(out, "% Rotation {rotation_id}")?;
        writeln!(out, "{}", fact_line(ty, rotation_id, shape))?;
    }

    writeln!(out)
}

/// Write the facts of every piece in `table`, in [`TetracubeType::ALL`] order.
pub fn write_facts<W: Write>(out: &mut W, table: &PieceTable) -> std::io::Result<()> {
    for (ty, orientations) in table.iter() {
        write_type_facts(out, ty, orientations)?;
    }
    Ok(())
}

/// Write the facts of every piece in `table` to the file at `path`.
pub fn write_file<P: AsRef<Path>>(
    table: &PieceTable,
    compression: Compression,
    path: P,
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::new(compression, BufWriter::new(file));

    write_facts(&mut writer, table)?;

    writer.finish()?.flush()
}
