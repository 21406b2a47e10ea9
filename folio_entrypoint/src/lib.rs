#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be used across entrypoint crates.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use folio_env::Environment;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};
use tracing_tree::HierarchicalLayer;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct FolioEntrypoint {
    env: Environment,
    /// indentation for hierarchical tree output; only applies in local dev
    tree_tracing: Option<usize>,
}

impl Default for FolioEntrypoint {
    fn default() -> Self {
        FolioEntrypoint {
            env: Environment::new_or_prod(),
            tree_tracing: None,
        }
    }
}

/// sentinel struct which guarantees that we called [FolioEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl FolioEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            ..Default::default()
        }
    }

    /// enable hierarchical tree output with the given indentation when running locally
    pub fn tree_tracing(mut self, val: Option<usize>) -> Self {
        self.tree_tracing = val;
        self
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match (self.env, self.tree_tracing) {
            (Environment::Local, None) => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            (Environment::Local, Some(level)) => {
                let subscriber = Registry::default().with(HierarchicalLayer::new(level));
                tracing::subscriber::set_global_default(subscriber).unwrap();
            }
            (Environment::Production | Environment::Develop, _) => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
