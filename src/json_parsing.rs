use{
    std::{
        fs::File,
        io::{self, BufReader, Write},
        path::Path,
    },
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    crate::error::*,
};

/// Read parameters of type `T` from a json file.
///
/// Without a file the default parameters are printed as an example and
/// `None` is returned. The raw json is handed back too, so it can be
/// stored in the header of output files.
pub fn parse<P, T>(file: Option<P>) -> Result<Option<(T, Value)>>
where P: AsRef<Path>,
    T: Default + Serialize + DeserializeOwned
{
    match file
    {
        None => {
            print_example::<T, _>(io::stdout().lock())?;
            Ok(None)
        },
        Some(path) => parse_file(path).map(Some)
    }
}

pub fn parse_file<P, T>(path: P) -> Result<(T, Value)>
where P: AsRef<Path>,
    T: DeserializeOwned
{
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| SimError::Io{path: path.to_path_buf(), source})?;
    let json: Value = serde_json::from_reader(BufReader::new(file))?;
    parse_value(json)
}

pub fn parse_value<T: DeserializeOwned>(json: Value) -> Result<(T, Value)>
{
    let opt = serde_json::from_value(json.clone())?;
    Ok((opt, json))
}

pub fn print_example<T, W>(mut writer: W) -> Result<()>
where T: Default + Serialize,
    W: Write
{
    serde_json::to_writer_pretty(&mut writer, &T::default())?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}
