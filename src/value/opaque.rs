use std::any::{self, Any};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a value that must be treated as an atomic unit.
///
/// This is the counterpart of a class instance in a dynamic configuration object: cloning and
/// merging never look inside it. Cloning the handle shares the same instance, and two handles
/// compare equal only when they point at the same instance.
#[derive(Clone)]
pub struct OpaqueHandle {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl OpaqueHandle {
    /// Wraps `value` in a new shared handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_merge_rs::value::OpaqueHandle;
    ///
    /// struct Plugin(&'static str);
    ///
    /// let handle = OpaqueHandle::new(Plugin("assets"));
    /// assert_eq!(handle.downcast_ref::<Plugin>().map(|p| p.0), Some("assets"));
    /// assert!(handle.ptr_eq(&handle.clone()));
    /// ```
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared instance without copying it.
    pub fn from_arc<T>(value: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            type_name: any::type_name::<T>(),
            inner: value,
        }
    }

    /// Rust type name of the wrapped instance.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn downcast_arc<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Returns `true` when both handles share the same instance.
    pub fn ptr_eq(&self, other: &OpaqueHandle) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.inner) as *const (),
            Arc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl PartialEq for OpaqueHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for OpaqueHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueHandle({})", self.type_name)
    }
}
