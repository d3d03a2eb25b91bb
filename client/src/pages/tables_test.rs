use super::*;
use crate::pages::test_doubles::MemoryCatalog;

fn books(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| Book { isbn: format!("{}", 100 + i), name: format!("Book {i}"), ..Book::default() })
        .collect()
}

#[tokio::test]
async fn books_table_loads_and_pages() {
    let catalog = MemoryCatalog::with_books(books(15));
    let mut page = BooksTablePage::default();
    assert_eq!(page.load(&catalog).await, Ok(15));
    assert_eq!(page.columns(), ["isbn", "name"]);

    let first = page.visible();
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.page_count, 2);

    page.query.page = 1;
    assert_eq!(page.visible().rows.len(), 5);
}

#[tokio::test]
async fn filter_resets_to_first_page() {
    let catalog = MemoryCatalog::with_books(books(15));
    let mut page = BooksTablePage::default();
    page.load(&catalog).await.unwrap();
    page.query.page = 1;
    page.query.set_filter("book 1");
    let visible = page.visible();
    assert_eq!(visible.page, 0);
    assert_eq!(visible.total, 6);
}

#[tokio::test]
async fn failed_reload_keeps_rows() {
    let mut page = BooksTablePage { rows: books(2), ..BooksTablePage::default() };
    assert!(page.load(&MemoryCatalog::failing()).await.is_err());
    assert_eq!(page.rows.len(), 2);
    assert!(!page.loading);
    assert!(page.error.is_some());
}

#[test]
fn author_draft_validates_fields() {
    let mut page = AuthorsTablePage { new_name: " Lem ".into(), new_birth_year: "1921".into(), ..AuthorsTablePage::default() };
    let draft = page.draft().unwrap();
    assert_eq!(draft.name, "Lem");
    assert_eq!(draft.birth_year, Some(1921));
    assert!(draft.nationality.is_none());

    page.new_birth_year = "nineteen".into();
    assert_eq!(page.draft(), Err("Birth year must be a number."));
    page.new_name = String::new();
    assert_eq!(page.draft(), Err("Enter the author's name."));
}

#[tokio::test]
async fn adding_author_appends_row() {
    let catalog = MemoryCatalog::default();
    let mut page = AuthorsTablePage { new_name: "Octavia Butler".into(), new_nationality: "American".into(), ..AuthorsTablePage::default() };
    let stored = page.add(&catalog).await.unwrap();
    assert_eq!(stored.id.as_deref(), Some("a1"));
    assert_eq!(page.table.rows.len(), 1);
    assert!(page.new_name.is_empty());

    assert_eq!(page.load(&catalog).await, Ok(1));
}

#[test]
fn header_label_marks_sorted_column() {
    let mut query = TableQuery::default();
    assert_eq!(header_label("birth_year", query.sort.as_ref()), "birth year");
    query.toggle_sort("name");
    assert_eq!(header_label("name", query.sort.as_ref()), "name ▲");
    assert_eq!(header_label("isbn", query.sort.as_ref()), "isbn");
    query.toggle_sort("name");
    assert_eq!(header_label("name", query.sort.as_ref()), "name ▼");
}

#[test]
fn page_label_is_one_based() {
    let query = TableQuery { page: 1, ..TableQuery::default() };
    let page = query.apply(&books(15));
    assert_eq!(page_label(&page), "Page 2 of 2 (15 rows)");
}
