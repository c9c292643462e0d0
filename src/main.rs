use clap::{Args, Parser, Subcommand};
use codex85::cli::{
    derive_backup, derive_dice, derive_hex, derive_mnemonic, derive_wif, derive_xprv,
    BackupOptions, SeedSource,
};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CODEX85_VERSION");
const BUILD: &str = env!("CODEX85_BUILD");
const PROFILE: &str = env!("CODEX85_PROFILE");
const GIT_HASH: &str = env!("CODEX85_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "codex85")]
#[command(author, about = "BIP85 deterministic entropy and codex32 backups", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(flatten)]
    seed: SeedArgs,

    /// Derived key index
    #[arg(long, global = true, default_value_t = 0)]
    index: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Sources for the master key; mutually exclusive via the "master" group.
#[derive(Args)]
struct SeedArgs {
    /// BIP32 root master private key, base58
    #[arg(long, group = "master")]
    xprv: Option<String>,

    /// BIP32 master seed in hex (usually computed by hashing the BIP39 mnemonic)
    #[arg(long, group = "master")]
    master_seed: Option<String>,

    /// BIP39 mnemonic phrase
    #[arg(long, group = "master")]
    mnemonic: Option<String>,

    /// BIP39 initial entropy in hex (used to derive the mnemonic)
    #[arg(long, group = "master")]
    mnemonic_entropy: Option<String>,

    /// Passphrase for the BIP39 mnemonic
    #[arg(long, default_value = "")]
    passphrase: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a BIP39 mnemonic
    #[command(alias = "m")]
    Mnemonic {
        /// Wordlist language
        #[arg(long, default_value = "english")]
        language: String,

        /// Number of words in the mnemonic
        #[arg(long, default_value = "12", value_parser = ["12", "15", "18", "21", "24"])]
        num_words: String,
    },

    /// Derive a codex32 backup (share set)
    #[command(alias = "b")]
    Backup {
        /// Human readable prefix
        #[arg(long, default_value = "ms", value_parser = ["ms", "cl"])]
        hrp: String,

        /// Recovery threshold (0 for a bare secret)
        #[arg(long, default_value = "2")]
        threshold: u8,

        /// Number of codex32 strings
        #[arg(long, default_value = "3")]
        n: u8,

        /// Payload bytes per string
        #[arg(long, default_value = "16")]
        byte_length: usize,

        /// Four-character identifier; non-alphabet characters default to
        /// the seed fingerprint
        #[arg(long, default_value = "????")]
        identifier: String,
    },

    /// Derive a HD-Seed WIF
    #[command(alias = "w")]
    Wif,

    /// Derive an XPRV (master private key)
    #[command(alias = "x")]
    Xprv,

    /// Derive a hex byte sequence
    #[command(alias = "h")]
    Hex {
        /// Number of bytes to generate
        #[arg(long)]
        num_bytes: usize,
    },

    /// Derive uniform dice rolls
    #[command(alias = "d")]
    Dice {
        /// Number of faces on the die
        #[arg(long, default_value = "6")]
        sides: u32,

        /// Number of rolls
        #[arg(long)]
        rolls: u32,
    },
}

fn run(cli: Cli, command: Commands) -> codex85::Result<String> {
    let source = SeedSource {
        xprv: cli.seed.xprv,
        master_seed: cli.seed.master_seed,
        mnemonic: cli.seed.mnemonic,
        mnemonic_entropy: cli.seed.mnemonic_entropy,
        passphrase: cli.seed.passphrase,
    };
    let master = source.resolve()?;

    match command {
        Commands::Mnemonic { language, num_words } => {
            let words: u32 = num_words.parse().expect("restricted by value_parser");
            derive_mnemonic(&master, &language, words, cli.index)
        }
        Commands::Backup {
            hrp,
            threshold,
            n,
            byte_length,
            identifier,
        } => {
            let options = BackupOptions {
                hrp,
                threshold,
                share_count: n,
                byte_length,
                identifier,
                index: cli.index,
            };
            let set = derive_backup(&master, &options)?;
            Ok(serde_json::to_string_pretty(&set)?)
        }
        Commands::Wif => derive_wif(&master, cli.index),
        Commands::Xprv => derive_xprv(&master, cli.index),
        Commands::Hex { num_bytes } => derive_hex(&master, num_bytes, cli.index),
        Commands::Dice { sides, rolls } => derive_dice(&master, sides, rolls, cli.index),
    }
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("codex85 {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command.take() {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(cli, command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
