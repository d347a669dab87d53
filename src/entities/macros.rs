//! Macros for reducing boilerplate when making entities reactable

/// Implement `Reactable` for an existing struct
///
/// The id field defaults to `id` and must be a `Uuid`.
///
/// # Example
/// ```rust,ignore
/// pub struct Comment {
///     pub comment_id: Uuid,
///     pub body: String,
/// }
///
/// impl_reactable!(Comment, "comment", comment_id);
/// ```
#[macro_export]
macro_rules! impl_reactable {
    ($type:ty, $type_name:expr) => {
        $crate::impl_reactable!($type, $type_name, id);
    };
    ($type:ty, $type_name:expr, $id_field:ident) => {
        impl $crate::core::reactable::Reactable for $type {
            fn reactable_type() -> &'static str {
                $type_name
            }

            fn reactable_id(&self) -> ::uuid::Uuid {
                self.$id_field
            }
        }
    };
}

/// Complete macro to create a reactable entity struct
///
/// Generates the struct with `id` and `created_at` fields plus the given
/// specific fields, its `Reactable` implementation and a `new` constructor.
///
/// # Example
///
/// ```rust,ignore
/// use reactify::prelude::*;
///
/// impl_reactable_entity!(
///     Post,
///     "post",
///     {
///         title: String,
///         body: String,
///     }
/// );
///
/// let post = Post::new("Hello".to_string(), "First post".to_string());
/// let manager = ctx.manager_for(&post);
/// ```
#[macro_export]
macro_rules! impl_reactable_entity {
    (
        $type:ident,
        $type_name:expr,
        {
            $( $specific_field:ident : $specific_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Unique identifier for this entity
            pub id: ::uuid::Uuid,

            /// When this entity was created
            pub created_at: ::chrono::DateTime<::chrono::Utc>,
            $( pub $specific_field : $specific_type ),*
        }

        $crate::impl_reactable!($type, $type_name);

        impl $type {
            /// Create a new instance of this entity
            pub fn new($( $specific_field: $specific_type ),*) -> Self {
                Self {
                    id: ::uuid::Uuid::new_v4(),
                    created_at: ::chrono::Utc::now(),
                    $( $specific_field ),*
                }
            }
        }
    };
}
