use clap::{Parser, ValueEnum};
use reel_catalog::UnlikePolicy;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "REEL_GATEWAY_LISTEN_ADDR";
pub const ID_OFFSET_ENV: &str = "REEL_GATEWAY_ID_OFFSET";
pub const UNLIKE_POLICY_ENV: &str = "REEL_GATEWAY_UNLIKE_POLICY";
pub const LOG_FORMAT_ENV: &str = "REEL_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnlikePolicyArg {
    #[value(name = "unconditional")]
    Unconditional,
    #[value(name = "liked-only")]
    LikedOnly,
}

impl Display for UnlikePolicyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnlikePolicyArg::Unconditional => write!(f, "unconditional"),
            UnlikePolicyArg::LikedOnly => write!(f, "liked-only"),
        }
    }
}

impl From<UnlikePolicyArg> for UnlikePolicy {
    fn from(value: UnlikePolicyArg) -> Self {
        match value {
            UnlikePolicyArg::Unconditional => UnlikePolicy::Unconditional,
            UnlikePolicyArg::LikedOnly => UnlikePolicy::LikedOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "reel-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Counter value to resume from; the first assigned id is `offset + 1`.
    #[arg(long, env = ID_OFFSET_ENV, default_value_t = 0)]
    pub id_offset: u64,

    #[arg(
        long,
        env = UNLIKE_POLICY_ENV,
        value_enum,
        default_value_t = UnlikePolicyArg::Unconditional
    )]
    pub unlike_policy: UnlikePolicyArg,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
