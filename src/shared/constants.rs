/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

