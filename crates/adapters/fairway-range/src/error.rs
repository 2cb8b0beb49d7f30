#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Read(String),
    Parse(String),
    EmptyClubTable,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(m) => write!(f, "catalog read error: {m}"),
            Self::Parse(m) => write!(f, "catalog parse error: {m}"),
            Self::EmptyClubTable => write!(f, "club table must contain at least one club"),
        }
    }
}

impl std::error::Error for CatalogError {}
