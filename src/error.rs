#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Obj(tobj::LoadError),
    Png(png::DecodingError),
    Image(String),
    Config(String),
    /// Geometric input with no well-defined result (checked API only)
    Degenerate(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(out, "i/o error: {}", err),
            Error::Obj(err) => write!(out, "could not load obj: {}", err),
            Error::Png(err) => write!(out, "could not decode png: {}", err),
            Error::Image(msg) => write!(out, "invalid image: {}", msg),
            Error::Config(msg) => write!(out, "invalid config: {}", msg),
            Error::Degenerate(msg) => write!(out, "degenerate input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Obj(err) => Some(err),
            Error::Png(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<tobj::LoadError> for Error {
    fn from(err: tobj::LoadError) -> Error {
        Error::Obj(err)
    }
}

impl From<png::DecodingError> for Error {
    fn from(err: png::DecodingError) -> Error {
        Error::Png(err)
    }
}
