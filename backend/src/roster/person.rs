/// One member of the roster, addressed publicly by `slug`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub submitted: bool,
}
