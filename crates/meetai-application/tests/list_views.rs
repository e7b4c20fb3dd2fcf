mod common;

use common::{Answer, Harness};
use meetai_application::{AgentFormUseCase, AgentsListUseCase, MeetingFormUseCase, MeetingsListUseCase};
use meetai_core::agent::{AgentInput, AgentRepository};
use meetai_core::config::{PaginationSettings, RouteSettings};
use meetai_core::filter::{AgentsFilterUpdate, MeetingsFilterUpdate, QueryParams};
use meetai_core::meeting::{MeetingInput, MeetingRenderState, MeetingRepository, MeetingStatus};
use meetai_core::view::NotificationLevel;
use meetai_infrastructure::InMemoryBackend;
use std::sync::Arc;

fn small_pages() -> PaginationSettings {
    PaginationSettings {
        default_page_size: 2,
        max_page_size: 100,
    }
}

#[tokio::test]
async fn test_agents_list_paginates_and_searches() {
    let backend = InMemoryBackend::new();
    for name in ["Alpha", "Beta", "Gamma"] {
        AgentRepository::create(&backend, &AgentInput::new(name, "Help"))
            .await
            .unwrap();
    }
    let harness = Harness::new(Answer::Confirm);
    let view = AgentsListUseCase::new(Arc::new(backend), harness.cache.clone(), small_pages());

    let mut filters = view.mount(&QueryParams::parse("?page=2"));
    let page = view.load(&filters).await.into_ready().unwrap();
    assert_eq!(page.results.total, 3);
    assert_eq!(page.results.items.len(), 1);
    assert!(page.has_previous_page());
    assert!(!page.has_next_page());
    assert!(!page.show_clear_filters);

    assert!(filters.set(AgentsFilterUpdate::search("alp")));
    assert_eq!(filters.state().page, 1);
    let page = view.load(&filters).await.into_ready().unwrap();
    assert_eq!(page.results.total, 1);
    assert_eq!(page.query_string, "search=alp");
    assert!(page.show_clear_filters);

    assert!(filters.clear());
    assert_eq!(filters.query_string(), "");
}

#[tokio::test]
async fn test_meetings_list_rows_carry_render_state() {
    let backend = InMemoryBackend::new();
    let agent = AgentRepository::create(&backend, &AgentInput::new("Tutor", "Teach"))
        .await
        .unwrap();
    let active = MeetingRepository::create(&backend, &MeetingInput::new("Live", &agent.id))
        .await
        .unwrap();
    MeetingRepository::create(&backend, &MeetingInput::new("Later", &agent.id))
        .await
        .unwrap();
    backend
        .set_meeting_status(&active.id, MeetingStatus::Active)
        .await
        .unwrap();

    let harness = Harness::new(Answer::Confirm);
    let view = MeetingsListUseCase::new(
        Arc::new(backend),
        harness.cache.clone(),
        PaginationSettings::default(),
    );

    let mut filters = view.mount(&QueryParams::parse("search=&page=4&agentId="));
    assert!(filters.set(MeetingsFilterUpdate::default().with_status(Some(MeetingStatus::Active))));
    assert_eq!(filters.state().page, 1);

    let page = view.load(&filters).await.into_ready().unwrap();
    assert_eq!(page.results.items.len(), 1);
    assert_eq!(
        page.results.items[0].render_state,
        MeetingRenderState::Active {
            meeting_id: active.id.clone()
        }
    );
    assert_eq!(page.query_string, "status=active");
}

#[tokio::test]
async fn test_agent_form_refreshes_list() {
    let backend = InMemoryBackend::new();
    let harness = Harness::new(Answer::Confirm);
    let list = AgentsListUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        PaginationSettings::default(),
    );
    let form = AgentFormUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        harness.notifier.clone(),
    );

    let filters = list.mount(&QueryParams::new());
    assert!(list.load(&filters).await.into_ready().unwrap().is_empty());

    let created = form
        .submit(None, AgentInput::new("Tutor", "Teach"))
        .await
        .unwrap();
    let page = list.load(&filters).await.into_ready().unwrap();
    assert_eq!(page.results.items, vec![created.clone()]);

    let updated = form
        .submit(Some(&created), AgentInput::new("Coach", "Teach"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Coach");
    let page = list.load(&filters).await.into_ready().unwrap();
    assert_eq!(page.results.items[0].name, "Coach");

    let levels: Vec<_> = harness.notifier.all().iter().map(|n| n.level).collect();
    assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Success]);
}

#[tokio::test]
async fn test_agent_form_validation_is_not_notified() {
    let backend = InMemoryBackend::new();
    let harness = Harness::new(Answer::Confirm);
    let form = AgentFormUseCase::new(
        Arc::new(backend),
        harness.cache.clone(),
        harness.notifier.clone(),
    );

    let err = form
        .submit(None, AgentInput::new("Tutor", " "))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Instructions is required");
    assert!(harness.notifier.all().is_empty());
}

#[tokio::test]
async fn test_meeting_form_create_opens_detail() {
    let backend = InMemoryBackend::new();
    let agent = AgentRepository::create(&backend, &AgentInput::new("Tutor", "Teach"))
        .await
        .unwrap();
    let harness = Harness::new(Answer::Confirm);
    let form = MeetingFormUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        harness.navigator.clone(),
        harness.notifier.clone(),
        RouteSettings::default(),
    );

    let created = form
        .submit(None, MeetingInput::new("Math", &agent.id))
        .await
        .unwrap();
    assert_eq!(
        harness.navigator.routes(),
        vec![format!("/meetings/{}", created.id)]
    );

    form.submit(Some(&created), MeetingInput::new("Algebra", &agent.id))
        .await
        .unwrap();
    assert_eq!(harness.navigator.routes().len(), 1);
}

#[tokio::test]
async fn test_meeting_form_backend_error_is_notified() {
    let backend = InMemoryBackend::new();
    let harness = Harness::new(Answer::Confirm);
    let form = MeetingFormUseCase::new(
        Arc::new(backend),
        harness.cache.clone(),
        harness.navigator.clone(),
        harness.notifier.clone(),
        RouteSettings::default(),
    );

    assert!(
        form.submit(None, MeetingInput::new("Math", "missing"))
            .await
            .is_err()
    );
    assert_eq!(harness.notifier.errors().len(), 1);
    assert!(harness.navigator.routes().is_empty());
}
