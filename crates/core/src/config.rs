use crate::commands::DEFAULT_PERMISSION_MESSAGE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, value};

trait ConfigSerializeDefault {
    fn fix_config(self, name: &str, doc: &mut DocumentMut);
}

macro_rules! impl_simple_default {
    ( $( $type:ty ),* ) => {
        $(
            impl ConfigSerializeDefault for $type {
                fn fix_config(self, name: &str, doc: &mut DocumentMut) {
                    doc.entry(name).or_insert_with(|| value(self));
                }
            }
        )*
    }
}

impl_simple_default!(String, i64, bool);

macro_rules! gen_config {
    (
        $( $(#[doc = $doc:literal])* $name:ident: $type:ty = $default:expr),*
    ) => {
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct EngineConfig {
            $(
                $(#[doc = $doc])*
                pub $name: $type,
            )*
        }

        impl EngineConfig {
            /// Reads `config_file`, adding any missing keys with their default
            /// values and writing the result back when something was added.
            pub fn load(config_file: impl AsRef<Path>) -> Result<EngineConfig> {
                let config_file = config_file.as_ref();
                let str = if config_file.exists() {
                    fs::read_to_string(config_file)
                        .with_context(|| format!("Failed to read {}", config_file.display()))?
                } else {
                    String::new()
                };
                let mut doc = str
                    .parse::<DocumentMut>()
                    .with_context(|| format!("Failed to parse {}", config_file.display()))?;

                $(
                    <$type as ConfigSerializeDefault>::fix_config($default, stringify!($name), &mut doc);
                )*

                let patched = doc.to_string();
                if str != patched {
                    fs::write(config_file, &patched)
                        .with_context(|| format!("Failed to write {}", config_file.display()))?;
                }

                Ok(toml::from_str(&patched)?)
            }
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                EngineConfig {
                    $( $name: $default, )*
                }
            }
        }
    };
}

gen_config! {
    /// Label of the main command, used where a command is declared without an explicit name.
    command_name: String = "cmdspec".to_string(),
    /// Sent to senders lacking the permission of any command registered by the binary.
    permission_message: String = DEFAULT_PERMISSION_MESSAGE.to_string(),
    log_directory: String = "./logs".to_string(),
    /// Whether the console holds every permission.
    console_permissions: bool = true,
    max_suggestions: i64 = 100
}
