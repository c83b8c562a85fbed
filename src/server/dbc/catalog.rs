//! Catalog owning every reference table.
//!
//! In eager mode (`load_all`) each table is read once at startup and shared by all
//! requests. Otherwise every accessor call opens a fresh streaming read of the extract,
//! trading repeated disk reads for resident memory.

use std::{
    any::Any,
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures_util::{stream::BoxStream, StreamExt, TryStreamExt};

use crate::server::{
    dbc::{
        reader::FlatTableReader,
        sequence::Sequence,
        table::{
            AchievementCategoryRow, AchievementRow, DbcRow, DbcTable, GlyphPropertiesRow,
            ItemAppearanceRow, ItemDisplayInfoRow, ItemModifiedAppearanceRow, ItemRetailRow,
            ItemRow, MountDisplayRow, MountRow, SpellIconRow, SpellItemEnchantmentRow, SpellRow,
            TalentRow, TalentTabRow,
        },
    },
    error::dbc::DbcError,
};

pub struct DbcCatalog {
    dir: PathBuf,
    /// Materialized tables, each an `Arc<Vec<Row>>` of the table's row type.
    loaded: HashMap<DbcTable, Arc<dyn Any + Send + Sync>>,
}

impl DbcCatalog {
    /// Creates a catalog reading extracts from `dir`. Nothing is read yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            loaded: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, table: DbcTable) -> PathBuf {
        self.dir.join(table.file_name())
    }

    /// Checks that every extract exists.
    ///
    /// Run at startup so a broken deployment fails before serving requests.
    ///
    /// # Returns
    /// - `Ok(())` - All extracts are present
    /// - `Err(DbcError::Missing)` - First missing extract
    /// - `Err(DbcError::Io)` - The data directory could not be inspected
    pub async fn verify(&self) -> Result<(), DbcError> {
        for table in DbcTable::ALL {
            let path = self.path(table);
            match tokio::fs::try_exists(&path).await {
                Ok(true) => {}
                Ok(false) => return Err(DbcError::Missing { path }),
                Err(source) => return Err(DbcError::Io { path, source }),
            }
        }

        Ok(())
    }

    /// Reads every table fully into memory.
    pub async fn load_all(&mut self) -> Result<(), DbcError> {
        self.load::<AchievementRow>().await?;
        self.load::<AchievementCategoryRow>().await?;
        self.load::<GlyphPropertiesRow>().await?;
        self.load::<ItemRow>().await?;
        self.load::<ItemRetailRow>().await?;
        self.load::<ItemAppearanceRow>().await?;
        self.load::<ItemModifiedAppearanceRow>().await?;
        self.load::<ItemDisplayInfoRow>().await?;
        self.load::<MountRow>().await?;
        self.load::<MountDisplayRow>().await?;
        self.load::<SpellRow>().await?;
        self.load::<SpellItemEnchantmentRow>().await?;
        self.load::<SpellIconRow>().await?;
        self.load::<TalentRow>().await?;
        self.load::<TalentTabRow>().await?;

        Ok(())
    }

    async fn load<T: DbcRow>(&mut self) -> Result<(), DbcError> {
        let rows: Vec<T> = self.stream::<T>().try_collect().await?;
        tracing::debug!("Loaded {} rows from {}", rows.len(), T::TABLE.file_name());

        self.loaded.insert(T::TABLE, Arc::new(rows));
        Ok(())
    }

    pub fn is_loaded(&self, table: DbcTable) -> bool {
        self.loaded.contains_key(&table)
    }

    /// Returns the rows of a table.
    ///
    /// A materialized view when the table was loaded eagerly, a fresh streaming read of
    /// the extract otherwise.
    pub fn table<T: DbcRow>(&self) -> Sequence<T> {
        let loaded = self
            .loaded
            .get(&T::TABLE)
            .cloned()
            .and_then(|rows| rows.downcast::<Vec<T>>().ok());

        match loaded {
            Some(rows) => Sequence::Materialized(rows),
            None => Sequence::Streaming(self.stream::<T>()),
        }
    }

    fn stream<T: DbcRow>(&self) -> BoxStream<'static, Result<T, DbcError>> {
        let table = T::TABLE;
        FlatTableReader::open(self.path(table), table.fields())
            .map(move |record| {
                record?
                    .deserialize::<T>()
                    .map_err(|source| DbcError::Decode {
                        table: table.name(),
                        source,
                    })
            })
            .boxed()
    }

    pub fn achievement(&self) -> Sequence<AchievementRow> {
        self.table()
    }

    pub fn achievement_category(&self) -> Sequence<AchievementCategoryRow> {
        self.table()
    }

    pub fn glyph_properties(&self) -> Sequence<GlyphPropertiesRow> {
        self.table()
    }

    pub fn item(&self) -> Sequence<ItemRow> {
        self.table()
    }

    pub fn item_retail(&self) -> Sequence<ItemRetailRow> {
        self.table()
    }

    pub fn item_appearance(&self) -> Sequence<ItemAppearanceRow> {
        self.table()
    }

    pub fn item_modified_appearance(&self) -> Sequence<ItemModifiedAppearanceRow> {
        self.table()
    }

    pub fn item_display_info(&self) -> Sequence<ItemDisplayInfoRow> {
        self.table()
    }

    pub fn mount(&self) -> Sequence<MountRow> {
        self.table()
    }

    pub fn mount_display(&self) -> Sequence<MountDisplayRow> {
        self.table()
    }

    pub fn spell(&self) -> Sequence<SpellRow> {
        self.table()
    }

    pub fn spell_item_enchantment(&self) -> Sequence<SpellItemEnchantmentRow> {
        self.table()
    }

    pub fn spell_icon(&self) -> Sequence<SpellIconRow> {
        self.table()
    }

    pub fn talent(&self) -> Sequence<TalentRow> {
        self.table()
    }

    pub fn talent_tab(&self) -> Sequence<TalentTabRow> {
        self.table()
    }
}
