use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

use crate::common::{DbContext, StoreError};

/// What a caller wants to do with a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Owner, or anyone for a system template.
    Read,
    /// Owner only. System templates are never writable.
    Write,
}

impl Access {
    pub fn permits(
        self,
        owner_user_id: Option<Uuid>,
        is_system_template: bool,
        caller: Uuid,
    ) -> bool {
        match self {
            Self::Read => {
                is_system_template || owner_user_id == Some(caller)
            }
            Self::Write => {
                !is_system_template && owner_user_id == Some(caller)
            }
        }
    }
}

#[derive(Debug, FromRow)]
struct Ownership {
    owner_user_id: Option<Uuid>,
    is_system_template: bool,
}

/// Checks `access` for `caller` on a template. A missing template and a
/// refused caller both yield `false`.
///
/// With `lock` the template row stays locked until the surrounding
/// transaction ends, which serialises writers of the same template.
pub(crate) async fn authorize(
    conn: &mut PgConnection,
    template_id: Uuid,
    caller: Uuid,
    access: Access,
    lock: bool,
) -> Result<bool, StoreError> {
    let sql = if lock {
        r#"
        SELECT owner_user_id, is_system_template
        FROM site_templates
        WHERE id = $1
        FOR UPDATE
        "#
    } else {
        r#"
        SELECT owner_user_id, is_system_template
        FROM site_templates
        WHERE id = $1
        "#
    };

    let ownership = sqlx::query_as::<_, Ownership>(sql)
        .bind(template_id)
        .fetch_optional(&mut *conn)
        .await
        .context("checking template access")?;

    Ok(ownership.is_some_and(|o| {
        access.permits(o.owner_user_id, o.is_system_template, caller)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_reads_and_writes_own_template() {
        let owner = Uuid::new_v4();
        assert!(Access::Read.permits(Some(owner), false, owner));
        assert!(Access::Write.permits(Some(owner), false, owner));
    }

    #[test]
    fn system_templates_are_read_only_for_everyone() {
        let caller = Uuid::new_v4();
        assert!(Access::Read.permits(None, true, caller));
        assert!(!Access::Write.permits(None, true, caller));
        assert!(!Access::Write.permits(Some(caller), true, caller));
    }

    #[test]
    fn strangers_get_nothing() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        assert!(!Access::Read.permits(Some(owner), false, stranger));
        assert!(!Access::Write.permits(Some(owner), false, stranger));
    }
}
