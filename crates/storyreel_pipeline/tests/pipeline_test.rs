//! Integration tests for the pipeline state machine.

mod test_utils;

use storyreel_core::StoryRequest;
use storyreel_pipeline::{PipelineStage, StoryPipeline, MAX_SELECTED_SCENES};
use test_utils::{storyboard_with, MockDriver};

fn idea() -> StoryRequest {
    StoryRequest::builder()
        .prompt("A robot finds a garden")
        .genre("Science fiction")
        .tone("Hopeful")
        .build()
        .unwrap()
}

#[tokio::test]
async fn full_run_reaches_the_final_stage() {
    let driver = MockDriver::new_success("Once, a robot found a garden.", storyboard_with(3));
    let mut pipeline = StoryPipeline::new(driver);
    assert_eq!(pipeline.stage(), PipelineStage::Idea);

    let story = pipeline.generate_story(idea()).await.unwrap();
    assert_eq!(story, "Once, a robot found a garden.");
    assert_eq!(pipeline.stage(), PipelineStage::Story);

    let storyboard = pipeline.generate_storyboard().await.unwrap();
    assert_eq!(storyboard.len(), 3);
    assert_eq!(pipeline.stage(), PipelineStage::Storyboard);
    assert_eq!(pipeline.context().selected_count(), 3);

    let results = pipeline.generate_videos().await.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.is_success()));
    assert_eq!(pipeline.stage(), PipelineStage::Final);
}

#[tokio::test]
async fn selection_is_capped_after_storyboard_generation() {
    let driver = MockDriver::new_success("story", storyboard_with(8));
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();

    assert_eq!(pipeline.context().selected_count(), MAX_SELECTED_SCENES);
}

#[tokio::test]
async fn empty_idea_is_rejected_without_calling_the_driver() {
    let driver = MockDriver::new_success("story", storyboard_with(3));
    let mut pipeline = StoryPipeline::new(driver);

    let request = StoryRequest::builder().prompt("   ").build().unwrap();
    assert!(pipeline.generate_story(request).await.is_err());
    assert_eq!(pipeline.stage(), PipelineStage::Idea);
}

#[tokio::test]
async fn story_failure_leaves_the_pipeline_at_idea() {
    let driver = MockDriver::new_story_error("model overloaded");
    let mut pipeline = StoryPipeline::new(driver);

    let err = pipeline.generate_story(idea()).await.unwrap_err();
    assert!(err.to_string().contains("model overloaded"));
    assert_eq!(pipeline.stage(), PipelineStage::Idea);
    assert!(pipeline.context().story().is_none());
}

#[tokio::test]
async fn storyboard_failure_leaves_the_pipeline_at_story() {
    let driver = MockDriver::new_storyboard_error("the story", "quota exceeded");
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    assert!(pipeline.generate_storyboard().await.is_err());

    assert_eq!(pipeline.stage(), PipelineStage::Story);
    assert_eq!(pipeline.context().story(), Some("the story"));
    assert!(pipeline.context().storyboard().is_none());
}

#[tokio::test]
async fn operations_out_of_stage_order_are_rejected() {
    let driver = MockDriver::new_success("story", storyboard_with(3));
    let mut pipeline = StoryPipeline::new(driver);

    assert!(pipeline.generate_storyboard().await.is_err());
    assert!(pipeline.generate_videos().await.is_err());
    assert_eq!(pipeline.stage(), PipelineStage::Idea);
}

#[tokio::test]
async fn selected_count_adjustment_is_range_guarded() {
    let driver = MockDriver::new_success("story", storyboard_with(4));
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();

    assert!(pipeline.set_selected_count(0).is_err());
    assert!(pipeline.set_selected_count(5).is_err());
    pipeline.set_selected_count(2).unwrap();

    let results = pipeline.generate_videos().await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn partial_success_still_reaches_final() {
    // Five scenes, three selected, scene 2 fails upstream.
    let driver =
        MockDriver::new_success("story", storyboard_with(5)).with_failing_scenes([2]);
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();
    pipeline.set_selected_count(3).unwrap();

    let outcomes: Vec<bool> = pipeline
        .generate_videos()
        .await
        .unwrap()
        .iter()
        .map(|r| r.is_success())
        .collect();
    assert_eq!(outcomes, vec![true, false, true]);
    assert_eq!(pipeline.stage(), PipelineStage::Final);
}

#[tokio::test]
async fn progress_is_observable_through_the_pipeline() {
    let driver = MockDriver::new_success("story", storyboard_with(3));
    let mut pipeline = StoryPipeline::new(driver);
    let rx = pipeline.progress();

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();
    pipeline.generate_videos().await.unwrap();

    let progress = *rx.borrow();
    assert_eq!(progress.total, 3);
    assert_eq!(progress.completed, 3);
    assert_eq!(progress.in_flight, None);
}

#[tokio::test]
async fn back_discards_only_the_current_stage_output() {
    let driver = MockDriver::new_success("the story", storyboard_with(3));
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();

    assert_eq!(pipeline.back(), PipelineStage::Story);
    assert!(pipeline.context().storyboard().is_none());
    assert_eq!(pipeline.context().story(), Some("the story"));

    // The retained story is reused; only the storyboard is re-fetched.
    pipeline.generate_storyboard().await.unwrap();
    assert_eq!(pipeline.stage(), PipelineStage::Storyboard);
}

#[tokio::test]
async fn back_from_final_keeps_batch_results() {
    let driver = MockDriver::new_success("story", storyboard_with(2));
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();
    pipeline.generate_videos().await.unwrap();
    assert_eq!(pipeline.stage(), PipelineStage::Final);

    assert_eq!(pipeline.back(), PipelineStage::BatchVideo);
    assert_eq!(pipeline.context().results().len(), 2);
}

#[tokio::test]
async fn back_at_idea_is_a_no_op() {
    let driver = MockDriver::new_success("story", storyboard_with(1));
    let mut pipeline = StoryPipeline::new(driver);

    assert_eq!(pipeline.back(), PipelineStage::Idea);
}

#[tokio::test]
async fn restart_from_final_clears_all_state() {
    let driver = MockDriver::new_success("story", storyboard_with(3));
    let mut pipeline = StoryPipeline::new(driver);

    pipeline.generate_story(idea()).await.unwrap();
    pipeline.generate_storyboard().await.unwrap();
    pipeline.generate_videos().await.unwrap();
    assert_eq!(pipeline.stage(), PipelineStage::Final);

    pipeline.restart();

    assert_eq!(pipeline.stage(), PipelineStage::Idea);
    assert!(pipeline.context().story().is_none());
    assert!(pipeline.context().storyboard().is_none());
    assert!(pipeline.context().results().is_empty());
    assert_eq!(pipeline.context().selected_count(), 0);
}
