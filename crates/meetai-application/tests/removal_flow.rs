mod common;

use common::{Answer, Harness};
use meetai_application::{
    AgentDetailUseCase, MeetingDetailUseCase, MeetingFormUseCase, REMOVE_CONFIRMATION_TITLE,
    RemovalOutcome,
};
use meetai_core::agent::{AgentInput, AgentRepository};
use meetai_core::config::RouteSettings;
use meetai_core::meeting::{MeetingInput, MeetingRenderState, MeetingRepository, MeetingStatus};
use meetai_core::query::QueryKey;
use meetai_infrastructure::{DicebearAvatarGenerator, InMemoryBackend};
use std::sync::Arc;

async fn seeded() -> (InMemoryBackend, String, String) {
    let backend = InMemoryBackend::new();
    let agent = AgentRepository::create(&backend, &AgentInput::new("Tutor", "Teach"))
        .await
        .unwrap();
    let meeting = MeetingRepository::create(&backend, &MeetingInput::new("Math", &agent.id))
        .await
        .unwrap();
    (backend, agent.id, meeting.id)
}

fn meeting_view(backend: &InMemoryBackend, harness: &Harness) -> MeetingDetailUseCase {
    MeetingDetailUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        harness.removal.clone(),
        RouteSettings::default(),
    )
}

fn agent_view(backend: &InMemoryBackend, harness: &Harness) -> AgentDetailUseCase {
    AgentDetailUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        harness.removal.clone(),
        Arc::new(DicebearAvatarGenerator::new()),
        RouteSettings::default(),
    )
}

#[tokio::test]
async fn test_dismissed_confirmation_never_removes() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Dismiss);
    let view = meeting_view(&backend, &harness);

    let outcome = view.remove(&meeting_id).await;

    assert_eq!(outcome, RemovalOutcome::Aborted);
    assert!(MeetingRepository::get_one(&backend, &meeting_id).await.is_ok());
    assert!(harness.navigator.routes().is_empty());
    assert!(harness.notifier.all().is_empty());
    assert_eq!(harness.presenter.prompts().len(), 1);
}

#[tokio::test]
async fn test_cancelled_confirmation_never_removes() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Cancel);
    let view = meeting_view(&backend, &harness);

    assert_eq!(view.remove(&meeting_id).await, RemovalOutcome::Aborted);
    assert!(MeetingRepository::get_one(&backend, &meeting_id).await.is_ok());
}

#[tokio::test]
async fn test_confirmed_removal_invalidates_and_navigates_once() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let view = meeting_view(&backend, &harness);

    // Warm the detail cache so invalidation is observable.
    assert!(view.load(&meeting_id).await.is_ready());
    assert!(harness.cache.contains(&QueryKey::Meeting(meeting_id.clone())).await);

    let outcome = view.remove(&meeting_id).await;

    assert_eq!(outcome, RemovalOutcome::Removed);
    assert!(!harness.cache.contains(&QueryKey::Meeting(meeting_id.clone())).await);
    assert!(!harness.cache.contains(&QueryKey::MeetingsList).await);
    assert_eq!(harness.navigator.routes(), vec!["/meetings".to_string()]);
    assert!(
        MeetingRepository::get_one(&backend, &meeting_id)
            .await
            .unwrap_err()
            .is_not_found()
    );

    let prompt = &harness.presenter.prompts()[0];
    assert_eq!(prompt.title, REMOVE_CONFIRMATION_TITLE);
    assert_eq!(prompt.description, "The following action will remove the meeting.");
}

#[tokio::test]
async fn test_failed_removal_notifies_and_stays() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let view = meeting_view(&backend, &harness);
    backend.fail_next_remove("Meeting is locked").await;

    let outcome = view.remove(&meeting_id).await;

    assert_eq!(outcome, RemovalOutcome::Failed("Meeting is locked".to_string()));
    assert!(harness.navigator.routes().is_empty());
    assert_eq!(harness.notifier.errors(), vec!["Meeting is locked".to_string()]);
    assert!(view.load(&meeting_id).await.is_ready());
    assert!(!view.is_removing(&meeting_id));
}

#[tokio::test]
async fn test_cancel_only_offered_for_upcoming() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let view = meeting_view(&backend, &harness);

    backend
        .set_meeting_status(&meeting_id, MeetingStatus::Completed)
        .await
        .unwrap();

    assert_eq!(view.cancel(&meeting_id).await, RemovalOutcome::Aborted);
    assert!(harness.presenter.prompts().is_empty());
    assert!(MeetingRepository::get_one(&backend, &meeting_id).await.is_ok());
}

#[tokio::test]
async fn test_cancel_upcoming_meeting() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let view = meeting_view(&backend, &harness);

    assert_eq!(view.cancel(&meeting_id).await, RemovalOutcome::Removed);
    assert_eq!(harness.navigator.routes(), vec!["/meetings".to_string()]);
}

#[tokio::test]
async fn test_agent_removal_names_meeting_count_and_cascades() {
    let (backend, agent_id, meeting_id) = seeded().await;
    MeetingRepository::create(&backend, &MeetingInput::new("Physics", &agent_id))
        .await
        .unwrap();
    let harness = Harness::new(Answer::Confirm);
    let view = AgentDetailUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        harness.removal.clone(),
        Arc::new(DicebearAvatarGenerator::new()),
        RouteSettings::default(),
    );

    let detail = view.load(&agent_id).await.into_ready().unwrap();
    assert_eq!(detail.meeting_count_label, "2 meetings");
    assert!(detail.avatar_uri.contains("bottts-neutral"));

    assert_eq!(view.remove(&agent_id).await, RemovalOutcome::Removed);
    assert_eq!(
        harness.presenter.prompts()[0].description,
        "The following action will remove 2 associated meetings."
    );
    assert_eq!(harness.navigator.routes(), vec!["/agents".to_string()]);
    assert!(MeetingRepository::get_one(&backend, &meeting_id).await.is_err());
    assert!(view.load(&agent_id).await.is_error());
}

#[tokio::test]
async fn test_missing_record_fails_before_prompting() {
    let backend = InMemoryBackend::new();
    let harness = Harness::new(Answer::Confirm);
    let view = AgentDetailUseCase::new(
        Arc::new(backend),
        harness.cache.clone(),
        harness.removal.clone(),
        Arc::new(DicebearAvatarGenerator::new()),
        RouteSettings::default(),
    );

    let outcome = view.remove("missing").await;

    assert!(matches!(outcome, RemovalOutcome::Failed(_)));
    assert!(harness.presenter.prompts().is_empty());
    assert_eq!(harness.notifier.errors().len(), 1);
}

#[tokio::test]
async fn test_load_follows_persisted_status() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let view = meeting_view(&backend, &harness);

    let detail = view.load(&meeting_id).await.into_ready().unwrap();
    assert!(matches!(detail.render_state, MeetingRenderState::Upcoming { .. }));

    backend
        .set_meeting_status(&meeting_id, MeetingStatus::Completed)
        .await
        .unwrap();

    let detail = view.load(&meeting_id).await.into_ready().unwrap();
    assert_eq!(detail.render_state.status(), MeetingStatus::Completed);
    assert!(detail.affordances.is_empty());
    let cached = view.cached(&meeting_id).await.unwrap();
    assert_eq!(cached.render_state.status(), MeetingStatus::Completed);

    // The cancel check reads the backend, not the first load.
    assert_eq!(view.cancel(&meeting_id).await, RemovalOutcome::Aborted);
    assert!(harness.presenter.prompts().is_empty());
    assert!(MeetingRepository::get_one(&backend, &meeting_id).await.is_ok());
}

#[tokio::test]
async fn test_cancel_refused_when_status_moved_on_since_load() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let view = meeting_view(&backend, &harness);

    assert!(view.load(&meeting_id).await.is_ready());
    backend
        .set_meeting_status(&meeting_id, MeetingStatus::Active)
        .await
        .unwrap();

    assert_eq!(view.cancel(&meeting_id).await, RemovalOutcome::Aborted);
    assert!(MeetingRepository::get_one(&backend, &meeting_id).await.is_ok());
}

#[tokio::test]
async fn test_new_meeting_updates_agent_removal_prompt() {
    let backend = InMemoryBackend::new();
    let agent = AgentRepository::create(&backend, &AgentInput::new("Tutor", "Teach"))
        .await
        .unwrap();
    let harness = Harness::new(Answer::Confirm);
    let agents = agent_view(&backend, &harness);
    let form = MeetingFormUseCase::new(
        Arc::new(backend.clone()),
        harness.cache.clone(),
        harness.navigator.clone(),
        harness.notifier.clone(),
        RouteSettings::default(),
    );

    let detail = agents.load(&agent.id).await.into_ready().unwrap();
    assert_eq!(detail.meeting_count_label, "0 meetings");

    form.submit(None, MeetingInput::new("Math", &agent.id))
        .await
        .unwrap();
    assert!(agents.cached(&agent.id).await.is_none());
    let detail = agents.load(&agent.id).await.into_ready().unwrap();
    assert_eq!(detail.meeting_count_label, "1 meeting");

    assert_eq!(agents.remove(&agent.id).await, RemovalOutcome::Removed);
    assert_eq!(
        harness.presenter.prompts()[0].description,
        "The following action will remove 1 associated meetings."
    );
}

#[tokio::test]
async fn test_meeting_removal_invalidates_agent_detail() {
    let (backend, agent_id, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let agents = agent_view(&backend, &harness);
    let meetings = meeting_view(&backend, &harness);

    assert!(agents.load(&agent_id).await.is_ready());
    assert_eq!(meetings.remove(&meeting_id).await, RemovalOutcome::Removed);

    assert!(!harness.cache.contains(&QueryKey::Agent(agent_id.clone())).await);
    let detail = agents.load(&agent_id).await.into_ready().unwrap();
    assert_eq!(detail.meeting_count_label, "0 meetings");
}

#[tokio::test]
async fn test_agent_removal_drops_its_meeting_details() {
    let (backend, agent_id, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Confirm);
    let agents = agent_view(&backend, &harness);
    let meetings = meeting_view(&backend, &harness);

    assert!(meetings.load(&meeting_id).await.is_ready());
    assert_eq!(agents.remove(&agent_id).await, RemovalOutcome::Removed);

    assert!(!harness.cache.contains(&QueryKey::Meeting(meeting_id.clone())).await);
    assert!(meetings.cached(&meeting_id).await.is_none());
    assert!(meetings.load(&meeting_id).await.is_error());
}

#[tokio::test]
async fn test_second_removal_of_same_record_is_busy() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Hold);
    let view = Arc::new(meeting_view(&backend, &harness));

    let first = tokio::spawn({
        let view = Arc::clone(&view);
        let meeting_id = meeting_id.clone();
        async move { view.remove(&meeting_id).await }
    });

    let prompt = harness.presenter.next_held().await;
    assert!(view.is_removing(&meeting_id));
    assert_eq!(view.remove(&meeting_id).await, RemovalOutcome::Busy);
    assert_eq!(harness.presenter.prompts().len(), 1);

    prompt.responder.confirm();
    assert_eq!(first.await.unwrap(), RemovalOutcome::Removed);
    assert!(!view.is_removing(&meeting_id));
    assert_eq!(harness.navigator.routes(), vec!["/meetings".to_string()]);
}

#[tokio::test]
async fn test_guard_released_after_held_prompt_dismissed() {
    let (backend, _, meeting_id) = seeded().await;
    let harness = Harness::new(Answer::Hold);
    let view = Arc::new(meeting_view(&backend, &harness));

    let first = tokio::spawn({
        let view = Arc::clone(&view);
        let meeting_id = meeting_id.clone();
        async move { view.remove(&meeting_id).await }
    });

    harness.presenter.next_held().await.responder.dismiss();
    assert_eq!(first.await.unwrap(), RemovalOutcome::Aborted);
    assert!(!view.is_removing(&meeting_id));

    harness.presenter.set_answer(Answer::Confirm);
    assert_eq!(view.remove(&meeting_id).await, RemovalOutcome::Removed);
}
