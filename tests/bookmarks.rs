mod support;

use forkify::storage::{BookmarkStorage, JsonBookmarkStore};
use forkify::Store;
use support::{recipe, FakeApi};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> Store<FakeApi, JsonBookmarkStore> {
    let api = FakeApi::new();
    api.insert(recipe("bread", "Bread"));
    api.insert(recipe("soup", "Soup"));
    Store::new(api, JsonBookmarkStore::in_dir(dir.path()).unwrap(), 10).unwrap()
}

#[tokio::test]
async fn bookmarks_survive_a_restart_in_order() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = store_in(&dir);
        store.add_bookmark(recipe("soup", "Soup")).unwrap();
        store.add_bookmark(recipe("bread", "Bread")).unwrap();
    }

    let mut store = store_in(&dir);
    let ids: Vec<_> = store.bookmarks().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["soup", "bread"]);

    let loaded = store.load_recipe("bread").await.unwrap();
    assert!(loaded.bookmarked);
}

#[tokio::test]
async fn add_then_delete_restores_the_stored_set() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.add_bookmark(recipe("soup", "Soup")).unwrap();
    let before = JsonBookmarkStore::in_dir(dir.path()).unwrap().load().unwrap();

    store.load_recipe("bread").await.unwrap();
    store.toggle_bookmark().unwrap();
    store.delete_bookmark("bread").unwrap();

    let after = JsonBookmarkStore::in_dir(dir.path()).unwrap().load().unwrap();
    assert_eq!(before, after);
    assert!(!store.recipe().unwrap().bookmarked);
}

#[tokio::test]
async fn clearing_empties_the_file() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.add_bookmark(recipe("soup", "Soup")).unwrap();

    store.clear_bookmarks().unwrap();

    assert!(store.bookmarks().is_empty());
    assert!(JsonBookmarkStore::in_dir(dir.path()).unwrap().load().unwrap().is_empty());
}
