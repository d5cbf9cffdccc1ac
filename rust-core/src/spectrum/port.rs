//! Named, typed output ports read by UI consumers

use parking_lot::RwLock;
use std::sync::Arc;

/// Value carried by a port
#[derive(Debug, Clone, PartialEq)]
pub enum PortValue {
    Bool(bool),
    UInt(u32),
    /// Owned array copy
    DoubleArray(Box<[f64]>),
    /// Shared snapshot of a producer-owned array, valid until the next publish
    Pointer(Arc<Vec<f64>>),
}

impl PortValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PortValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u32> {
        match self {
            PortValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the array contents of `DoubleArray` or `Pointer`
    pub fn as_doubles(&self) -> Option<&[f64]> {
        match self {
            PortValue::DoubleArray(values) => Some(values),
            PortValue::Pointer(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

/// A thread-safe port
#[derive(Debug)]
pub struct Port {
    plugin_name: &'static str,
    specifier: &'static str,
    control_port: &'static str,
    value: RwLock<PortValue>,
}

impl Port {
    pub fn new(
        plugin_name: &'static str,
        specifier: &'static str,
        control_port: &'static str,
        value: PortValue,
    ) -> Self {
        Self {
            plugin_name,
            specifier,
            control_port,
            value: RwLock::new(value),
        }
    }

    pub fn plugin_name(&self) -> &'static str {
        self.plugin_name
    }

    pub fn specifier(&self) -> &'static str {
        self.specifier
    }

    pub fn control_port(&self) -> &'static str {
        self.control_port
    }

    /// Replace the value as a single update
    pub fn safe_write(&self, value: PortValue) {
        *self.value.write() = value;
    }

    /// Copy out the current value
    ///
    /// `Pointer` values clone the `Arc`, not the array.
    pub fn safe_read(&self) -> PortValue {
        self.value.read().clone()
    }

    pub fn read_bool(&self) -> Option<bool> {
        self.value.read().as_bool()
    }

    /// Run `f` over the current array contents without copying them
    pub fn with_doubles<R>(&self, f: impl FnOnce(&[f64]) -> R) -> Option<R> {
        let guard = self.value.read();
        guard.as_doubles().map(f)
    }

    /// Shared snapshot of a `Pointer` value
    pub fn snapshot(&self) -> Option<Arc<Vec<f64>>> {
        match &*self.value.read() {
            PortValue::Pointer(values) => Some(Arc::clone(values)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_port() {
        let port = Port::new("analyse", "./buffer-cleared[0]", "1/4", PortValue::Bool(false));
        assert_eq!(port.read_bool(), Some(false));

        port.safe_write(PortValue::Bool(true));
        assert_eq!(port.read_bool(), Some(true));
        assert_eq!(port.specifier(), "./buffer-cleared[0]");
    }

    #[test]
    fn test_pointer_snapshot_survives_republish() {
        let port = Port::new("analyse", "./magnitude-buffer[0]", "4/4", PortValue::UInt(0));
        assert!(port.snapshot().is_none());

        port.safe_write(PortValue::Pointer(Arc::new(vec![1.0, 2.0])));
        let old = port.snapshot().unwrap();

        port.safe_write(PortValue::Pointer(Arc::new(vec![3.0, 4.0])));

        assert_eq!(*old, vec![1.0, 2.0]);
        assert_eq!(port.with_doubles(|v| v.to_vec()), Some(vec![3.0, 4.0]));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(PortValue::UInt(3).as_uint(), Some(3));
        assert_eq!(PortValue::UInt(3).as_bool(), None);

        let array = PortValue::DoubleArray(vec![0.5; 2].into_boxed_slice());
        assert_eq!(array.as_doubles(), Some(&[0.5, 0.5][..]));
    }
}
