//! Services backing the `/api/procedimentos` endpoints.

use validator::Validate;

use crate::domain::procedure::{NewProcedure, Procedure};
use crate::domain::types::ProcedureId;
use crate::dto::page::PageParams;
use crate::dto::procedure::ProcedureDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{ProcedureReader, ProcedureWriter};
use crate::services::{ServiceError, ServiceResult};

pub const SORT_PROPERTY: &str = "nome";

/// Inserts the procedure, or replaces every column when `id` names an existing one.
pub fn save_procedure<R>(
    repo: &R,
    id: Option<ProcedureId>,
    procedure: &NewProcedure,
) -> ServiceResult<Procedure>
where
    R: ProcedureReader + ProcedureWriter + ?Sized,
{
    if let Some(id) = id {
        if repo.get_procedure_by_id(id)?.is_some() {
            return Ok(repo.replace_procedure(id, procedure)?);
        }
    }

    Ok(repo.create_procedure(procedure)?)
}

pub fn find_procedure_by_id<R>(repo: &R, id: ProcedureId) -> ServiceResult<Option<Procedure>>
where
    R: ProcedureReader + ?Sized,
{
    repo.get_procedure_by_id(id).map_err(ServiceError::from)
}

pub fn list_procedures<R>(repo: &R) -> ServiceResult<Vec<Procedure>>
where
    R: ProcedureReader + ?Sized,
{
    repo.list_procedures().map_err(ServiceError::from)
}

/// Returns one page of procedures ordered by name.
pub fn list_procedures_page<R>(repo: &R, request: PageRequest) -> ServiceResult<Page<Procedure>>
where
    R: ProcedureReader + ?Sized,
{
    let (total, items) = repo.list_procedures_page(request)?;
    Ok(Page::new(items, request, total, SORT_PROPERTY))
}

pub fn delete_procedure<R>(repo: &R, id: ProcedureId) -> ServiceResult<()>
where
    R: ProcedureWriter + ?Sized,
{
    repo.delete_procedure(id).map_err(ServiceError::from)
}

/// Validates the payload and persists it, returning the stored procedure.
pub fn create_procedure<R>(repo: &R, dto: ProcedureDto) -> ServiceResult<ProcedureDto>
where
    R: ProcedureReader + ProcedureWriter + ?Sized,
{
    dto.validate()?;

    let id = dto.id.map(ProcedureId::new).transpose()?;
    let new_procedure = NewProcedure::try_from(dto)?;

    let procedure = save_procedure(repo, id, &new_procedure)?;
    log::info!("Saved procedure {}", procedure.id);

    Ok(procedure.into())
}

/// Replaces the procedure stored under `id` with the payload.
pub fn update_procedure<R>(repo: &R, id: i32, dto: ProcedureDto) -> ServiceResult<()>
where
    R: ProcedureReader + ProcedureWriter + ?Sized,
{
    dto.validate()?;

    let procedure_id =
        ProcedureId::new(id).map_err(|_| ServiceError::procedure_not_found(id))?;

    if repo.get_procedure_by_id(procedure_id)?.is_none() {
        return Err(ServiceError::procedure_not_found(id));
    }

    let new_procedure = NewProcedure::try_from(dto)?;
    save_procedure(repo, Some(procedure_id), &new_procedure)?;

    Ok(())
}

pub fn get_procedure<R>(repo: &R, id: i32) -> ServiceResult<ProcedureDto>
where
    R: ProcedureReader + ?Sized,
{
    let procedure_id =
        ProcedureId::new(id).map_err(|_| ServiceError::procedure_not_found(id))?;

    find_procedure_by_id(repo, procedure_id)?
        .map(ProcedureDto::from)
        .ok_or_else(|| ServiceError::procedure_not_found(id))
}

pub fn remove_procedure<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProcedureReader + ProcedureWriter + ?Sized,
{
    let procedure_id =
        ProcedureId::new(id).map_err(|_| ServiceError::procedure_not_found(id))?;

    let procedure = find_procedure_by_id(repo, procedure_id)?
        .ok_or_else(|| ServiceError::procedure_not_found(id))?;

    delete_procedure(repo, procedure.id)?;
    log::info!("Deleted procedure {}", procedure.id);

    Ok(())
}

pub fn list_procedure_dtos<R>(repo: &R) -> ServiceResult<Vec<ProcedureDto>>
where
    R: ProcedureReader + ?Sized,
{
    Ok(list_procedures(repo)?
        .into_iter()
        .map(ProcedureDto::from)
        .collect())
}

pub fn page_procedure_dtos<R>(repo: &R, params: PageParams) -> ServiceResult<Page<ProcedureDto>>
where
    R: ProcedureReader + ?Sized,
{
    params.validate()?;
    Ok(list_procedures_page(repo, params.into_request())?.map(ProcedureDto::from))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::types::{Price, ProcedureName};
    use crate::pagination::SortDirection;
    use crate::repository::mock::MockRepository;

    fn stored(id: i32, name: &str) -> Procedure {
        Procedure {
            id: ProcedureId::new(id).expect("valid id"),
            doctor_id: None,
            appointment_id: None,
            name: ProcedureName::new(name).expect("valid name"),
            description: None,
            price: Price::new(150.0).expect("valid price"),
        }
    }

    fn consulta_dto() -> ProcedureDto {
        ProcedureDto {
            id: None,
            medico: None,
            consulta: None,
            nome: "Consulta".into(),
            descricao: None,
            preco: 150.0,
        }
    }

    #[test]
    fn create_without_id_inserts() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id().never();
        repo.expect_create_procedure()
            .times(1)
            .returning(|new| {
                let mut procedure = stored(1, new.name.as_str());
                procedure.price = new.price;
                Ok(procedure)
            });

        let dto = create_procedure(&repo, consulta_dto()).expect("created");
        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.nome, "Consulta");
        assert_eq!(dto.preco, 150.0);
    }

    #[test]
    fn create_with_existing_id_replaces() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id()
            .with(eq(ProcedureId::new(5).expect("valid id")))
            .returning(|id| Ok(Some(stored(id.get(), "Antigo"))));
        repo.expect_replace_procedure()
            .times(1)
            .returning(|id, new| Ok(stored(id.get(), new.name.as_str())));
        repo.expect_create_procedure().never();

        let mut dto = consulta_dto();
        dto.id = Some(5);
        let saved = create_procedure(&repo, dto).expect("saved");
        assert_eq!(saved.id, Some(5));
        assert_eq!(saved.nome, "Consulta");
    }

    #[test]
    fn create_with_unknown_id_inserts_under_new_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id().returning(|_| Ok(None));
        repo.expect_replace_procedure().never();
        repo.expect_create_procedure()
            .times(1)
            .returning(|new| Ok(stored(42, new.name.as_str())));

        let mut dto = consulta_dto();
        dto.id = Some(999);
        let saved = create_procedure(&repo, dto).expect("saved");
        assert_eq!(saved.id, Some(42));
    }

    #[test]
    fn create_rejects_invalid_payload() {
        let repo = MockRepository::new();
        let mut dto = consulta_dto();
        dto.preco = -10.0;

        let result = create_procedure(&repo, dto);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn update_missing_procedure_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id().returning(|_| Ok(None));
        repo.expect_replace_procedure().never();

        let result = update_procedure(&repo, 3, consulta_dto());
        assert!(matches!(
            result,
            Err(ServiceError::NotFound { id: 3, .. })
        ));
    }

    #[test]
    fn update_replaces_using_path_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id()
            .returning(|id| Ok(Some(stored(id.get(), "Antigo"))));
        repo.expect_replace_procedure()
            .withf(|id, new| id.get() == 3 && new.name.as_str() == "Consulta")
            .times(1)
            .returning(|id, new| Ok(stored(id.get(), new.name.as_str())));

        let mut dto = consulta_dto();
        dto.id = Some(77);
        update_procedure(&repo, 3, dto).expect("updated");
    }

    #[test]
    fn get_and_remove_report_absence() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id().returning(|_| Ok(None));
        repo.expect_delete_procedure().never();

        assert!(matches!(
            get_procedure(&repo, 8),
            Err(ServiceError::NotFound { id: 8, .. })
        ));
        assert!(matches!(
            remove_procedure(&repo, 8),
            Err(ServiceError::NotFound { id: 8, .. })
        ));
        assert!(matches!(
            get_procedure(&repo, 0),
            Err(ServiceError::NotFound { id: 0, .. })
        ));
    }

    #[test]
    fn remove_existing_procedure_deletes_it() {
        let mut repo = MockRepository::new();
        repo.expect_get_procedure_by_id()
            .returning(|id| Ok(Some(stored(id.get(), "Consulta"))));
        repo.expect_delete_procedure()
            .with(eq(ProcedureId::new(8).expect("valid id")))
            .times(1)
            .returning(|_| Ok(()));

        remove_procedure(&repo, 8).expect("deleted");
    }

    #[test]
    fn page_request_is_forwarded_and_wrapped() {
        let mut repo = MockRepository::new();
        repo.expect_list_procedures_page()
            .with(eq(PageRequest::new(1, 2, SortDirection::Desc)))
            .returning(|_| Ok((5, vec![stored(3, "C"), stored(4, "B")])));

        let params = PageParams {
            page: Some(1),
            limit: Some(2),
            direction: Some("desc".into()),
        };
        let page = page_procedure_dtos(&repo, params).expect("page");
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 1);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.sort.property, "nome");
        assert_eq!(page.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn page_index_out_of_range_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_list_procedures_page().never();

        let params = PageParams {
            page: Some(usize::MAX),
            ..PageParams::default()
        };
        assert!(matches!(
            page_procedure_dtos(&repo, params),
            Err(ServiceError::Validation(_))
        ));
    }
}
