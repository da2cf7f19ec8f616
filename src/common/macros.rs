/// Declares a fully-populated settings group together with its partial
/// counterpart.
///
/// `patchable! { pub struct Group / GroupPatch { pub field: Ty = default, .. } }`
/// expands to:
/// - `Group`, every field present, missing JSON keys filled from the defaults;
/// - `GroupPatch`, every field optional, absent keys left untouched;
/// - `Group::apply(&mut self, &GroupPatch)` overwriting exactly the keys present.
#[macro_export]
macro_rules! patchable {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn apply(&mut self, patch: &$patch) {
                $(
                    if let Some(value) = &patch.$field {
                        self.$field = value.clone();
                    }
                )*
            }
        }

        impl $patch {
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }
    };
}
