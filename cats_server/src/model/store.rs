use super::cat::{Cat, CatForCreate};

// Ids never repeat, even after a removal.
#[derive(Debug)]
pub struct CatStore {
    cats: Vec<Cat>,
    next_id: u64,
}

impl Default for CatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatStore {
    pub fn new() -> Self {
        Self {
            cats: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_seed(seed: impl IntoIterator<Item = CatForCreate>) -> Self {
        let mut store = Self::new();
        for cat_c in seed {
            store.append(cat_c);
        }
        store
    }

    pub fn append(&mut self, cat_c: CatForCreate) -> Cat {
        let cat = Cat {
            id: self.next_id.to_string(),
            name: cat_c.name,
            age: cat_c.age,
        };
        self.next_id += 1;
        self.cats.push(cat.clone());
        cat
    }

    pub fn find_index(&self, id: &str) -> Option<usize> {
        self.cats.iter().position(|cat| cat.id == id)
    }

    /// Removes the cat at `index`, shifting later cats down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Cat> {
        (index < self.cats.len()).then(|| self.cats.remove(index))
    }

    pub fn list(&self) -> Vec<Cat> {
        self.cats.clone()
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }
}
