use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

fn get_sample_cfg() -> &'static str {
    include_str!("../../../kambas.toml")
}

pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(get_sample_cfg().as_bytes())?;
    writer.flush()
}
