use yeardots_core::db::{open_db, open_db_in_memory, DbError};
use yeardots_core::{
    LaunchRoute, OnboardingFlow, OnboardingService, OnboardingStep, RepoError, RepoResult,
    SettingsRepository, SqliteSettingsRepository, ONBOARDING_KEY,
};

struct BrokenRepository;

impl SettingsRepository for BrokenRepository {
    fn get(&self, _key: &str) -> RepoResult<Option<String>> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::InvalidQuery,
        )))
    }

    fn set(&self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::InvalidQuery,
        )))
    }

    fn remove(&self, _key: &str) -> RepoResult<bool> {
        Ok(false)
    }
}

#[test]
fn missing_flag_routes_to_onboarding() {
    let conn = open_db_in_memory().unwrap();
    let service = OnboardingService::new(SqliteSettingsRepository::new(&conn));

    assert_eq!(service.launch_route(), LaunchRoute::Onboarding);
}

#[test]
fn any_flag_value_routes_to_main() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    repo.set(ONBOARDING_KEY, "").unwrap();
    let service = OnboardingService::new(repo);

    assert_eq!(service.launch_route(), LaunchRoute::Main);
}

#[test]
fn completion_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yeardots.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let service = OnboardingService::new(SqliteSettingsRepository::new(&conn));
        assert_eq!(service.launch_route(), LaunchRoute::Onboarding);
        assert_eq!(service.complete(), LaunchRoute::Main);
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    assert_eq!(repo.get(ONBOARDING_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(OnboardingService::new(repo).launch_route(), LaunchRoute::Main);
}

#[test]
fn read_failure_fails_open_to_main() {
    let service = OnboardingService::new(BrokenRepository);

    assert_eq!(service.launch_route(), LaunchRoute::Main);
}

#[test]
fn write_failure_still_lets_user_through() {
    let service = OnboardingService::new(BrokenRepository);

    assert_eq!(service.complete(), LaunchRoute::Main);
}

#[test]
fn finishing_the_flow_then_completing_routes_to_main() {
    let conn = open_db_in_memory().unwrap();
    let service = OnboardingService::new(SqliteSettingsRepository::new(&conn));
    let mut flow = OnboardingFlow::new();

    let mut last = flow.next();
    while last != OnboardingStep::Finished {
        last = flow.next();
    }
    assert!(flow.is_finished());
    service.complete();

    assert_eq!(service.launch_route(), LaunchRoute::Main);
}
