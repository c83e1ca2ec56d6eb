use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Herald reference server
#[derive(Debug, Parser)]
#[command(name = "herald", about = "JSON envelope reference server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "herald.toml", env = "HERALD_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "HERALD_LISTEN")]
    pub listen: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_config_file() {
        let args = temp_env::with_vars_unset(["HERALD_CONFIG", "HERALD_LISTEN"], || Args::parse_from(["herald"]));

        assert_eq!(args.config, PathBuf::from("herald.toml"));
        assert!(args.listen.is_none());
    }

    #[test]
    fn listen_flag_parses_socket_address() {
        let args = temp_env::with_vars_unset(["HERALD_CONFIG", "HERALD_LISTEN"], || {
            Args::parse_from(["herald", "--config", "conf/dev.toml", "--listen", "127.0.0.1:8080"])
        });

        assert_eq!(args.config, PathBuf::from("conf/dev.toml"));
        assert_eq!(args.listen, Some("127.0.0.1:8080".parse().unwrap()));
    }

    #[test]
    fn environment_supplies_listen_address() {
        let args = temp_env::with_var("HERALD_LISTEN", Some("127.0.0.1:9000"), || Args::parse_from(["herald"]));
        assert_eq!(args.listen, Some("127.0.0.1:9000".parse().unwrap()));
    }
}
