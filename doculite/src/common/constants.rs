// doc constants
pub const DOC_ID: &str = "_id";

/// Length of store-generated document id tokens.
pub const GENERATED_ID_LENGTH: usize = 13;

// seed catalog constants
pub const DB_ADMIN: &str = "admin";
pub const DB_CONFIG: &str = "config";
pub const DB_LOCAL: &str = "local";
pub const DB_TEST: &str = "TESTDB";

pub const SEED_DATABASES: [&str; 4] = [DB_ADMIN, DB_CONFIG, DB_LOCAL, DB_TEST];

// Compile-time assertion for seed database count
const _: () = {
    const SEED_COUNT: usize = 4;
    const ACTUAL_COUNT: usize = SEED_DATABASES.len();
    const _: [(); 1] = [(); (ACTUAL_COUNT == SEED_COUNT) as usize];
};
