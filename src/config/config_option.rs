/// A configurable value, with the bounds within which the value may be set.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        let (min, max) = self.min_max();
        match min <= value && value <= max {
            true => {
                log::info!("{} set to: {value}", self.name);
                self.value = value;
                true
            }
            false => false,
        }
    }
}
