/*!
Configuration of a context.

All configuration for a context is contained within the [Config] struct given to the context on creation.

```rust
# use ifactor::config::Config;
let mut config = Config::default();
assert!(config.magnitude_bound.value);

assert!(config.magnitude_bound.set(false));
assert!(!config.magnitude_bound.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bound each factor by the number to be factored.
    ///
    /// The bound is entailed by any factorization, and so only serves to prune the search of a solver.
    /// Note, the clause excluding 1 as a factor is not part of the bound, and is always added.
    pub magnitude_bound: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            magnitude_bound: ConfigOption {
                name: "magnitude_bound",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
