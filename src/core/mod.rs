mod entry;
pub use self::entry::{Entry, HexKey};

mod parse;
pub use self::parse::{parse_line, Unparsed};

mod mapping;
pub use self::mapping::{Iter, Mapping};

mod scan;
pub use self::scan::{scan, Scan, ScanStats};

pub mod serialize;

mod convert;
pub use self::convert::{convert, write_confirmation, write_warning, Conversion, Converter};
