/// Declares a record type and generates its [`Record`](crate::Record) implementation.
///
/// Each field is written `<kind> <name>[ = "key"][: <Type>]`:
///
/// | kind      | JSON shape                    | storage                 |
/// |-----------|-------------------------------|-------------------------|
/// | `field`   | scalar                        | `T`                     |
/// | `array`   | array of one scalar type      | `Vec<T>`                |
/// | `multi`   | array of mixed values         | `Vec<DynamicValue>`     |
/// | `object`  | nested record                 | `Option<Box<R>>`        |
/// | `objects` | array of nested records       | `Vec<R>`                |
///
/// Scalar types are the ones implementing [`Scalar`](crate::Scalar): `i32`, `i64`,
/// `f64`, `bool`, `Option<String>` and anything declared with
/// [`scalar_alias!`](crate::scalar_alias). The JSON key defaults to the field name;
/// `= "key"` overrides it, which is how keys that are Rust keywords are mapped.
///
/// ```
/// use mason_core::{record, Record};
///
/// record! {
///     pub struct Button {
///         field label: Option<String>,
///         field url: Option<String>,
///     }
/// }
///
/// record! {
///     pub struct Activity {
///         field name: Option<String>,
///         field kind = "type": i32,
///         objects buttons: Button,
///         multi extra,
///     }
/// }
///
/// let activity = Activity::from_text::<mason_core::JsonBackend>(
///     r#"{"name": "Mason", "type": 1, "buttons": [{"label": "Join"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(activity.kind, 1);
/// assert_eq!(activity.buttons[0].label.as_deref(), Some("Join"));
/// assert!(activity.extra.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $kind:ident $field:ident $(= $key:literal)? $(: $ty:ty)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::__field!(storage $kind $($ty)?),
            )*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = ::core::stringify!($name);

            const FIELDS: &'static [$crate::FieldDescriptor] = &[
                $(
                    $crate::FieldDescriptor {
                        name: $crate::__field!(key $field $($key)?),
                        kind: <$crate::__field!(shape $kind $($ty)?) as $crate::shape::FieldShape>::KIND,
                        ty: <$crate::__field!(shape $kind $($ty)?) as $crate::shape::FieldShape>::TYPE,
                    },
                )*
            ];

            #[allow(unused_variables)]
            fn parse_fields<B: $crate::Backend>(node: &B::Node) -> Self {
                Self {
                    $(
                        $field: <$crate::__field!(shape $kind $($ty)?) as $crate::shape::FieldShape>::parse::<B>(
                            B::get_field(node, $crate::__field!(key $field $($key)?)),
                            <Self as $crate::Record>::NAME,
                            $crate::__field!(key $field $($key)?),
                        ),
                    )*
                }
            }

            #[allow(unused_variables)]
            fn serialize_fields<B: $crate::Backend>(&self, object: &mut B::Node) {
                $(
                    <$crate::__field!(shape $kind $($ty)?) as $crate::shape::FieldShape>::serialize::<B>(
                        &self.$field,
                        object,
                        $crate::__field!(key $field $($key)?),
                    );
                )*
            }

            #[allow(unused_variables)]
            fn print_fields(
                &self,
                printer: &mut $crate::printer::Printer<'_>,
            ) -> ::core::fmt::Result {
                $(
                    <$crate::__field!(shape $kind $($ty)?) as $crate::shape::FieldShape>::print(
                        &self.$field,
                        $crate::__field!(key $field $($key)?),
                        printer,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }

            fn free_members(&mut self) {
                $(
                    <$crate::__field!(shape $kind $($ty)?) as $crate::shape::FieldShape>::release(
                        &mut self.$field,
                    );
                )*
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::printer::write_record(f, self, 0)
            }
        }
    };
}

/// Maps a field kind keyword onto its shape and storage types, and a field onto its key.
#[doc(hidden)]
#[macro_export]
macro_rules! __field {
    (key $field:ident) => { ::core::stringify!($field) };
    (key $field:ident $key:literal) => { $key };

    (shape field $ty:ty) => { $crate::shape::ScalarField<$ty> };
    (shape array $ty:ty) => { $crate::shape::ArrayField<$ty> };
    (shape multi) => { $crate::shape::MultiField };
    (shape object $ty:ty) => { $crate::shape::ObjectField<$ty> };
    (shape objects $ty:ty) => { $crate::shape::ObjectArrayField<$ty> };

    (storage field $ty:ty) => { $ty };
    (storage array $ty:ty) => { ::std::vec::Vec<$ty> };
    (storage multi) => { ::std::vec::Vec<$crate::DynamicValue> };
    (storage object $ty:ty) => { ::std::option::Option<::std::boxed::Box<$ty>> };
    (storage objects $ty:ty) => { ::std::vec::Vec<$ty> };
}

/// Resolves a user type onto a scalar base type.
///
/// The alias converts through `From` in both directions, so the base may itself be an
/// alias. Enumerations usually alias `i32`:
///
/// ```
/// use mason_core::{scalar_alias, BaseKind, Scalar};
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq)]
/// pub struct Status(pub i32);
///
/// impl From<i32> for Status {
///     fn from(value: i32) -> Self {
///         Status(value)
///     }
/// }
///
/// impl From<Status> for i32 {
///     fn from(value: Status) -> Self {
///         value.0
///     }
/// }
///
/// scalar_alias!(Status => i32);
///
/// assert_eq!(Status::BASE, BaseKind::Int32);
/// ```
#[macro_export]
macro_rules! scalar_alias {
    ($alias:ty => $base:ty) => {
        impl $crate::Scalar for $alias {
            const BASE: $crate::BaseKind = <$base as $crate::Scalar>::BASE;

            fn from_node<B: $crate::Backend>(node: &B::Node) -> ::core::option::Option<Self> {
                <$base as $crate::Scalar>::from_node::<B>(node)
                    .map(<$alias as ::core::convert::From<$base>>::from)
            }

            fn to_node<B: $crate::Backend>(&self) -> B::Node {
                let base: $base = ::core::convert::From::from(::core::clone::Clone::clone(self));
                <$base as $crate::Scalar>::to_node::<B>(&base)
            }

            fn write_value(&self, out: &mut dyn ::core::fmt::Write) -> ::core::fmt::Result {
                let base: $base = ::core::convert::From::from(::core::clone::Clone::clone(self));
                <$base as $crate::Scalar>::write_value(&base, out)
            }
        }
    };
}
