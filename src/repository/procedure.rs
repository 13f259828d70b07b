//! Repository implementation for procedures.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        procedure::{NewProcedure, Procedure},
        types::ProcedureId,
    },
    models::procedure::{NewProcedure as DbNewProcedure, Procedure as DbProcedure},
    pagination::{PageRequest, SortDirection},
    repository::{
        DieselRepository, ProcedureReader, ProcedureWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ProcedureReader for DieselRepository {
    fn get_procedure_by_id(&self, id: ProcedureId) -> RepositoryResult<Option<Procedure>> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;
        let db_procedure = procedimentos::table
            .find(id.get())
            .first::<DbProcedure>(&mut conn)
            .optional()?;

        match db_procedure {
            Some(db_procedure) => Ok(Some(
                Procedure::try_from(db_procedure).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_procedures(&self) -> RepositoryResult<Vec<Procedure>> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;
        procedimentos::table
            .order(procedimentos::id.asc())
            .load::<DbProcedure>(&mut conn)?
            .into_iter()
            .map(|procedure| Procedure::try_from(procedure).map_err(RepositoryError::from))
            .collect()
    }

    fn list_procedures_page(
        &self,
        request: PageRequest,
    ) -> RepositoryResult<(usize, Vec<Procedure>)> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;

        let total: i64 = procedimentos::table.count().get_result(&mut conn)?;

        let mut query = procedimentos::table.into_boxed::<Sqlite>();
        query = match request.direction {
            SortDirection::Asc => query.order(procedimentos::nome.asc()),
            SortDirection::Desc => query.order(procedimentos::nome.desc()),
        };

        let items = query
            .then_order_by(procedimentos::id.asc())
            .limit(request.sql_limit())
            .offset(request.sql_offset())
            .load::<DbProcedure>(&mut conn)?
            .into_iter()
            .map(|procedure| Procedure::try_from(procedure).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }
}

impl ProcedureWriter for DieselRepository {
    fn create_procedure(&self, new_procedure: &NewProcedure) -> RepositoryResult<Procedure> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;
        let db_new_procedure: DbNewProcedure = new_procedure.into();

        let db_procedure = diesel::insert_into(procedimentos::table)
            .values(&db_new_procedure)
            .get_result::<DbProcedure>(&mut conn)?;

        Procedure::try_from(db_procedure).map_err(RepositoryError::from)
    }

    fn replace_procedure(
        &self,
        id: ProcedureId,
        procedure: &NewProcedure,
    ) -> RepositoryResult<Procedure> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;
        let changes: DbNewProcedure = procedure.into();

        let db_procedure = diesel::update(procedimentos::table.find(id.get()))
            .set(&changes)
            .get_result::<DbProcedure>(&mut conn)?;

        Procedure::try_from(db_procedure).map_err(RepositoryError::from)
    }

    fn delete_procedure(&self, id: ProcedureId) -> RepositoryResult<()> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;
        diesel::delete(procedimentos::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
