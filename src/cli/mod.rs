use clap::Parser;

/// The favicon is fully determined by the program; there are no options
/// beyond the ones clap provides.
#[derive(Parser, Debug)]
#[command(name = "fpicon")]
#[command(version)]
#[command(about = "Draw the Family Points favicon into frontend/public", long_about = None)]
pub struct Args {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_arguments() {
        assert!(Args::try_parse_from(["fpicon"]).is_ok());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Args::try_parse_from(["fpicon", "--size", "64"]).is_err());
        assert!(Args::try_parse_from(["fpicon", "out.ico"]).is_err());
    }
}
