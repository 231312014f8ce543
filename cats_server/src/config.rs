use crate::{Error, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::{env, sync::OnceLock};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
#[derive(Debug)]
pub struct Config {
    pub HOST: IpAddr,
    pub PORT: u16,
    pub SEED_CATS: bool,
}

impl Config {
    pub fn load_from_env() -> Result<Config> {
        Ok(Config {
            HOST: get_env_parse_or("SERVICE_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            PORT: get_env_parse_or("SERVICE_PORT", 3000)?,
            SEED_CATS: get_env_parse_or("SERVICE_SEED_CATS", true)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.HOST, self.PORT)
    }
}

fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| Error::ConfigWrongFormat(name)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(Error::ConfigWrongFormat(name)),
    }
}
