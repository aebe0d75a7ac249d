use{
    std::{
        fs::File,
        io::{Write, BufWriter},
        path::{Path, PathBuf},
    },
    serde_json::Value,
    crate::{
        error::*,
        stats_methods::CurveStatistics,
    },
};

pub type CurveWriter = BufWriter<File>;

/// Writes curves as whitespace separated columns, one row per step,
/// preceded by `#` comment lines holding the parameters as json.
pub struct SirWriter<W: Write = CurveWriter>
{
    writer: W,
    path: Option<PathBuf>
}

impl SirWriter<CurveWriter>
{
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .map_err(|source| SimError::Io{path: path.clone(), source})?;
        Ok(Self{
            writer: BufWriter::new(file),
            path: Some(path)
        })
    }
}

impl<W: Write> SirWriter<W>
{
    pub fn from_writer(writer: W) -> Self
    {
        Self{writer, path: None}
    }

    fn io_err(&self, source: std::io::Error) -> SimError
    {
        SimError::Io{
            path: self.path.clone().unwrap_or_default(),
            source
        }
    }

    pub fn write_header(&mut self, jsons: &[Value]) -> Result<()>
    {
        write_jsons(jsons, &mut self.writer)?;
        Ok(())
    }

    /// One mean and one variance column per named curve set
    pub fn write_statistics(&mut self, columns: &[(&str, &CurveStatistics)]) -> Result<()>
    {
        self.write_statistics_inner(columns)
            .map_err(|e| self.io_err(e))
    }

    fn write_statistics_inner(&mut self, columns: &[(&str, &CurveStatistics)]) -> std::io::Result<()>
    {
        write!(self.writer, "#Step")?;
        for (name, _) in columns
        {
            write!(self.writer, " {name}_mean {name}_var")?;
        }
        writeln!(self.writer)?;

        let steps = columns.iter()
            .map(|(_, stats)| stats.len())
            .min()
            .unwrap_or(0);
        for step in 0..steps
        {
            write!(self.writer, "{step}")?;
            for (_, stats) in columns
            {
                let v = &stats.per_step[step];
                write!(self.writer, " {:e} {:e}", v.mean, v.var)?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W
    {
        self.writer
    }
}

pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> Result<()>
{
    for j in jsons{
        write!(writer, "#").map_err(json_io)?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer).map_err(json_io)?;
    }
    Ok(())
}

fn json_io(e: std::io::Error) -> SimError
{
    SimError::Json(serde_json::Error::io(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_columns() {
        let a = CurveStatistics::from_curves(&[vec![(0, 0.5), (1, 0.25)]]).unwrap();
        let b = CurveStatistics::from_curves(&[vec![(0, 0.5), (1, 0.0)]]).unwrap();

        let mut writer = SirWriter::from_writer(Vec::new());
        writer.write_header(&[serde_json::json!({"seed": 1})]).unwrap();
        writer.write_statistics(&[("NoVaccination", &a), ("RandomVaccination", &b)]).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], r#"#{"seed":1}"#);
        assert_eq!(lines[1], "#Step NoVaccination_mean NoVaccination_var RandomVaccination_mean RandomVaccination_var");
        assert_eq!(lines[2], "0 5e-1 0e0 5e-1 0e0");
        assert_eq!(lines.len(), 4);
    }
}
