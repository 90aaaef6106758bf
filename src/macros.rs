//! Accessor and builder macros
//!
//! `impl_enum_accessors!` removes the repetitive match code on tree enums;
//! `props!` and `h!` are the terse builders used by presets.

// =============================================================================
// Enum accessor generation
// =============================================================================

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // paragraph -> Paragraph, link -> Link, text -> Text
///     impl_enum_accessors!(paragraph, link, text);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

// =============================================================================
// Builders
// =============================================================================

/// Build a [`Properties`](crate::attr::Properties) map.
///
/// ```ignore
/// let props = props! { "class" => "link-card", "href" => url.as_str() };
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::attr::Properties::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::attr::Properties::new();
        $( props.set($key, $value); )+
        props
    }};
}

/// Build an output element; each child may be an element, a string or an
/// `Option` of either (`None` is dropped).
///
/// ```ignore
/// h!("div", props! { "class" => "card" }, title, description.map(|d| h!("p", props!(), d)))
/// ```
#[macro_export]
macro_rules! h {
    ($tag:expr) => {
        $crate::output::h($tag, $crate::attr::Properties::new(), ::std::vec::Vec::<$crate::output::Child>::new())
    };
    ($tag:expr, $props:expr $(, $child:expr)* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::output::Child> =
            ::std::vec![$($crate::output::Child::from($child)),*];
        $crate::output::h($tag, $props, children)
    }};
}
