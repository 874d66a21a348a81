// ABOUTME: Declarative macros that generate the closed dimension tree from one field listing
// ABOUTME: Each group yields a complete record, its partial overlay, and field-wise merge code

/// Declare a dimension value enum with its wire name for every variant.
///
/// Generates `ALL`, `as_str` and `Display` so that lookup tables can be
/// checked for totality by iterating `ALL`. A trailing `default = Variant`
/// also generates `Default`.
macro_rules! dimension_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
        default = $default:ident
    ) => {
        dimension_enum! {
            $(#[$meta])*
            $name {
                $( $(#[$vmeta])* $variant => $text ),+
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name used in persisted settings and JSON output
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declare one dimension group: the complete record and its partial overlay.
///
/// The partial type carries `Option` for every field. `apply_to` overwrites
/// only the fields an overlay specifies, `merge_from` folds a higher-priority
/// overlay into a lower one. Attributes written as `@partial #[...]` land on
/// the overlay field only. Both are generated from the same field list, so
/// adding a field can never leave the merge out of step with the record.
macro_rules! dimension_group {
    (
        $(#[$meta:meta])*
        $full:ident / $partial:ident {
            $(
                $(#[$fmeta:meta])*
                $(@partial #[$pmeta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $full {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        impl Default for $full {
            fn default() -> Self {
                Self {
                    $( $field: $default, )+
                }
            }
        }

        #[doc = concat!("Partial overlay for [`", stringify!($full), "`]. `None` means \"not specified\".")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $partial {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $(#[$pmeta])*
                pub $field: Option<$ty>,
            )+
        }

        impl $partial {
            /// Overwrite every field of `target` that this overlay specifies.
            pub fn apply_to(&self, target: &mut $full) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )+
            }

            /// Fold `other` into this overlay; fields `other` specifies win.
            pub fn merge_from(&mut self, other: &Self) {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )+
            }

            /// True when no field is specified.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }

            /// Number of fields this overlay specifies.
            pub fn specified_fields(&self) -> usize {
                0 $( + usize::from(self.$field.is_some()) )+
            }
        }

        impl From<$full> for $partial {
            fn from(full: $full) -> Self {
                Self {
                    $( $field: Some(full.$field), )+
                }
            }
        }
    };
}
