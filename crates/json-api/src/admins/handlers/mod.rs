//! Admin Handlers

pub(crate) mod home;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod signup;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use maanushi_app::domain::admins::records::{AdminRecord, AdminUuid};

    use crate::test_helpers::TEST_ADMIN_EMAIL;

    pub(super) fn make_admin(uuid: AdminUuid) -> AdminRecord {
        AdminRecord {
            uuid,
            email: TEST_ADMIN_EMAIL.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            phone_num: "9876543210".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
