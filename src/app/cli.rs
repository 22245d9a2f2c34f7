//! cli stuff
use {
    crate::{config::options::DashTheme, error::Result},
    clap::{ArgGroup, Parser, Subcommand},
    schemars::generate::SchemaSettings,
    std::{
        fs::OpenOptions,
        io::{BufWriter, Write},
    },
};

/// the CLI
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// the subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the available themes
    List,
    /// Show the active theme
    Current,
    /// Switch to a theme
    Set {
        /// The theme id
        id: String,
        /// Treat this session as entitled to premium themes
        #[arg(long)]
        entitled: bool,
    },
    /// Forget the chosen theme and follow the os again
    Reset,
    /// Print theme css variables
    Css {
        /// Only print this theme
        id: Option<String>,
    },
    /// Follow os light/dark changes until interrupted
    Watch,
    /// Send documentation feedback
    #[command(group(ArgGroup::new("verdict").required(true).args(["helpful", "unhelpful"])))]
    Feedback {
        /// The documentation page
        #[arg(long)]
        page: String,
        /// The page helped
        #[arg(long)]
        helpful: bool,
        /// The page didn't help
        #[arg(long)]
        unhelpful: bool,
        /// An optional comment
        #[arg(long)]
        comment: Option<String>,
    },
}

impl Cli {
    /// handle the config generation flags
    ///
    /// returns true if any of them ran, in which case nothing else should
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema
    /// returns an error if it fails to generate and/or save the default config
    pub fn run_generators(&self) -> Result<bool> {
        if self.gen_schema {
            Self::gen_schema(self.save)?;
        }

        if self.gen_default {
            Self::gen_defaults(self.save)?;
        }

        Ok(self.gen_schema || self.gen_default)
    }

    /// save a string to a file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to open or write `path`
    pub fn write_to_file(path: &str, contents: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        let mut w = BufWriter::new(file);
        w.write_all(contents.as_bytes())?;
        Ok(())
    }

    /// generate/save the config schema
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string
    /// returns an error if it fails to save the schema to `dashtheme.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let schema_str = schema_json()?;

        if save {
            Self::write_to_file("dashtheme.schema.json", &schema_str)?;
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// generate/save the default config file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML
    /// returns an error if it fails to save the default config to `dashtheme.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&DashTheme::default())?;

        if save {
            Self::write_to_file("dashtheme.default.toml", &defaults)?;
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }
}

/// the config json schema
fn schema_json() -> Result<String> {
    let settings = SchemaSettings::draft2020_12().for_serialize();
    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<DashTheme>();
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_entitlement() {
        let cli = Cli::try_parse_from(["dashtheme", "set", "neon", "--entitled"]).unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Set {
                id: "neon".to_string(),
                entitled: true
            })
        );
    }

    #[test]
    fn feedback_needs_a_verdict() {
        assert!(Cli::try_parse_from(["dashtheme", "feedback", "--page", "faq"]).is_err());
        assert!(
            Cli::try_parse_from(["dashtheme", "feedback", "--page", "faq", "--helpful", "--unhelpful"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["dashtheme", "feedback", "--page", "faq", "--unhelpful"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Feedback { helpful: false, unhelpful: true, .. })
        ));
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = schema_json().unwrap();

        for section in ["theme", "storage", "sync", "session", "system", "http", "logging"] {
            assert!(schema.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }
}
