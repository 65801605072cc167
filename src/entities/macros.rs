//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::entity::Entity) for a struct carrying
/// `id: Uuid`, `user: Uuid` and `created_at: DateTime<Utc>` fields.
///
/// # Example
/// ```rust,ignore
/// impl_owned_entity!(Notification, "notification", "notifications");
/// ```
#[macro_export]
macro_rules! impl_owned_entity {
    ($type:ident, $singular:expr, $plural:expr) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn owner(&self) -> ::uuid::Uuid {
                self.user
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }
        }
    };
}
