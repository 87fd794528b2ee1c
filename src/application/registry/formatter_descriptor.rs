use crate::ports::outbound::{Formatter, FormatterClass, FormatterContext};
use std::any::TypeId;
use std::fmt;

type Constructor = fn(FormatterContext) -> Box<dyn Formatter>;

/// Runtime record of one formatter implementation type.
///
/// This is what the selector hands back: the implementation's metadata
/// plus a way to build instances of it. Two descriptors are equal when they
/// describe the same implementation type.
#[derive(Clone, Copy)]
pub struct FormatterDescriptor {
    name: Option<&'static str>,
    media_type: &'static str,
    can_multiple: bool,
    type_id: TypeId,
    type_name: &'static str,
    constructor: Constructor,
}

impl FormatterDescriptor {
    /// Describes the implementation type `T`
    pub fn of<T: FormatterClass>() -> Self {
        Self {
            name: T::NAME,
            media_type: T::MEDIA_TYPE,
            can_multiple: T::CAN_MULTIPLE,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            constructor: construct::<T>,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    pub fn can_multiple(&self) -> bool {
        self.can_multiple
    }

    /// Fully qualified name of the implementation type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name without its module path, for messages
    pub fn short_type_name(&self) -> &'static str {
        self.type_name
            .rsplit("::")
            .next()
            .unwrap_or(self.type_name)
    }

    /// True if this descriptor describes `T`
    pub fn is<T: FormatterClass>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Builds a formatter instance for one request
    pub fn instantiate(&self, context: FormatterContext) -> Box<dyn Formatter> {
        (self.constructor)(context)
    }
}

fn construct<T: FormatterClass>(context: FormatterContext) -> Box<dyn Formatter> {
    Box::new(T::create(context))
}

impl PartialEq for FormatterDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for FormatterDescriptor {}

impl fmt::Debug for FormatterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterDescriptor")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("can_multiple", &self.can_multiple)
            .field("type_name", &self.type_name)
            .finish()
    }
}
