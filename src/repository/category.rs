use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let items = category::table
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let item = category::table
            .filter(category::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }

    fn category_name_exists(&self, name: &CategoryName) -> RepositoryResult<bool> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let total = category::table
            .filter(category::name.eq(name.as_str()))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total > 0)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::category;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(category::table)
            .values(db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(&self, id: CategoryId, name: &CategoryName) -> RepositoryResult<usize> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let affected = diesel::update(category::table.filter(category::id.eq(id.get())))
            .set(category::name.eq(name.as_str()))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let affected = diesel::delete(category::table.filter(category::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
