use models::StarredEntry;
use uuid::Uuid;

/// Entries the service starts with when `starred.seed_defaults` is on.
pub fn default_entries() -> Vec<StarredEntry> {
    vec![
        StarredEntry {
            id: Uuid::from_u128(0xa7272cd9_26fb_44b5_8d53_9781f55175a1),
            restaurant_id: "869c848c-7a58-4ed6-ab88-72ee2e8e677c".into(),
            comment: Some("Best pho in NYC".into()),
        },
        StarredEntry {
            id: Uuid::from_u128(0x8df59b21_2152_4f9b_9200_95c19aa88226),
            restaurant_id: "e8036613-4b72-46f6-ab5e-edd2fc7c4fe4".into(),
            comment: Some("Their lunch special is the best!".into()),
        },
    ]
}
