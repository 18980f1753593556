//! Results dashboard scene: per-agent summary strip, ladder tabs, and an
//! expandable run list with links and error details.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::InputOutcome;
use crate::dashboard::github::{branch_tree_url, run_logs_url};
use crate::dashboard::{
    agent_ladder_success_rates, agent_success_rates, field_present, AgentLadderSummary,
    AgentSummary, RunRecord,
};

pub struct DashboardState {
    pub records: Vec<RunRecord>,
    /// `owner/repo` slug of the artifacts repository.
    pub repo: String,
    pub agent_summaries: Vec<AgentSummary>,
    pub ladder_summaries: Vec<AgentLadderSummary>,
    /// Ladder tabs; index 0 is the "All" tab.
    pub ladders: Vec<String>,
    pub selected_ladder: usize,
    pub selected_index: usize,
    pub expanded: bool,
}

impl DashboardState {
    pub fn new(records: Vec<RunRecord>, repo: String) -> Self {
        let agent_summaries = agent_success_rates(&records);
        let ladder_summaries = agent_ladder_success_rates(&records);

        let mut ladders: Vec<String> = records.iter().map(|r| r.ladder.clone()).collect();
        ladders.sort();
        ladders.dedup();
        ladders.insert(0, "All".to_string());

        Self {
            records,
            repo,
            agent_summaries,
            ladder_summaries,
            ladders,
            selected_ladder: 0,
            selected_index: 0,
            expanded: false,
        }
    }

    /// Summary entries for the strip: overall per-agent rates on the "All"
    /// tab, each agent's rate on the selected ladder otherwise.
    pub fn strip_summaries(&self) -> Vec<AgentSummary> {
        if self.selected_ladder == 0 {
            return self.agent_summaries.clone();
        }
        let ladder = &self.ladders[self.selected_ladder];
        self.ladder_summaries
            .iter()
            .filter(|s| s.ladder == *ladder)
            .map(|s| AgentSummary {
                agent_id: s.agent_id.clone(),
                total: s.total,
                successes: s.successes,
                rate: s.rate,
            })
            .collect()
    }

    /// Record indices visible under the current ladder tab.
    pub fn filtered_indices(&self) -> Vec<usize> {
        if self.selected_ladder == 0 {
            return (0..self.records.len()).collect();
        }
        let ladder = &self.ladders[self.selected_ladder];
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.ladder == *ladder)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_record(&self) -> Option<&RunRecord> {
        let indices = self.filtered_indices();
        indices.get(self.selected_index).map(|&i| &self.records[i])
    }

    pub fn next_tab(&mut self) {
        self.selected_ladder = (self.selected_ladder + 1) % self.ladders.len();
        self.selected_index = 0;
        self.expanded = false;
    }

    pub fn prev_tab(&mut self) {
        self.selected_ladder = (self.selected_ladder + self.ladders.len() - 1) % self.ladders.len();
        self.selected_index = 0;
        self.expanded = false;
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.filtered_indices().len() {
            self.selected_index += 1;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> InputOutcome {
        match code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.prev_tab(),
            KeyCode::Right => self.next_tab(),
            KeyCode::Enter => {
                if self.selected_record().is_some() {
                    self.expanded = !self.expanded;
                }
            }
            KeyCode::Esc => {
                if self.expanded {
                    self.expanded = false;
                } else {
                    return InputOutcome::QuitGame;
                }
            }
            KeyCode::Char('q') => return InputOutcome::QuitGame,
            _ => {}
        }
        InputOutcome::Continue
    }
}

pub fn draw_dashboard(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(" Benchmark Runs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Agent summary strip
            Constraint::Length(1), // Ladder tabs
            Constraint::Min(0),    // Run list / detail
            Constraint::Length(1), // Help
        ])
        .split(inner);

    draw_summary_strip(frame, chunks[0], state);
    draw_ladder_tabs(frame, chunks[1], state);

    if state.expanded {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);
        draw_run_list(frame, body[0], state);
        draw_run_detail(frame, body[1], state);
    } else {
        draw_run_list(frame, chunks[2], state);
    }

    let help = Paragraph::new("[Left/Right] Ladder  [Up/Down] Select  [Enter] Expand  [Q/Esc] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_summary_strip(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut spans = Vec::new();
    for summary in &state.strip_summaries() {
        let color = if summary.rate >= 0.5 {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::styled(
            format!(
                " {} {:.0}% ({}/{}) ",
                summary.agent_id,
                summary.rate * 100.0,
                summary.successes,
                summary.total
            ),
            Style::default().fg(color),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            " no runs loaded ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let strip = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(strip, area);
}

fn draw_ladder_tabs(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut spans = Vec::new();
    for (i, ladder) in state.ladders.iter().enumerate() {
        let style = if i == state.selected_ladder {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", ladder), style));
    }
    let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(tabs, area);
}

fn draw_run_list(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indices = state.filtered_indices();
    if indices.is_empty() {
        let empty = Paragraph::new("No runs under this ladder.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = indices
        .iter()
        .enumerate()
        .map(|(i, &record_idx)| {
            let record = &state.records[record_idx];
            let is_selected = i == state.selected_index;
            let prefix = if is_selected { "> " } else { "  " };
            let style = if record.is_success() {
                Style::default().fg(Color::Green)
            } else if is_selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::raw(format!("{} ", record.status_marker())),
                Span::styled(
                    format!(
                        "{} / {} / run {}",
                        record.agent_id, record.ladder, record.run
                    ),
                    style,
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

/// Link to the run's code: the recorded commit URL when present, a tree
/// link built from the branch otherwise.
fn code_link(record: &RunRecord, repo: &str) -> Option<String> {
    if field_present(&record.commit_url) {
        return record.commit_url.clone();
    }
    if field_present(&record.branch) {
        let branch = record.branch.as_deref().unwrap_or_default();
        return Some(branch_tree_url(repo, branch));
    }
    None
}

fn draw_run_detail(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(record) = state.selected_record() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} / run {} ", record.agent_id, record.run))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if record.is_success() {
            Color::Green
        } else {
            Color::Red
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{} {}", record.status_marker(), record.status),
            Style::default().fg(if record.is_success() {
                Color::Green
            } else {
                Color::Red
            }),
        ),
    ])];

    lines.push(Line::from(format!("Ladder: {}", record.ladder)));
    lines.push(Line::from(format!("Time:   {}", record.timestamp_display())));

    if field_present(&record.branch) {
        let branch = record.branch.as_deref().unwrap_or_default();
        lines.push(Line::from(format!("Branch: {}", branch)));
        lines.push(Line::from(Span::styled(
            format!(
                "Logs:   {}",
                run_logs_url(&state.repo, branch, &record.agent_id, record.run)
            ),
            Style::default().fg(Color::Cyan),
        )));
    }

    if let Some(url) = code_link(record, &state.repo) {
        lines.push(Line::from(Span::styled(
            format!("Code:   {}", url),
            Style::default().fg(Color::Cyan),
        )));
    }

    if field_present(&record.logs) {
        lines.push(Line::from(format!(
            "Log file: {}",
            record.logs.as_deref().unwrap_or_default()
        )));
    }

    if field_present(&record.error) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {}", record.error.as_deref().unwrap_or_default()),
            Style::default().fg(Color::Red),
        )));
    }

    if field_present(&record.traceback) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Traceback:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for tb_line in record.traceback.as_deref().unwrap_or_default().lines() {
            lines.push(Line::from(Span::styled(
                tb_line.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(agent: &str, ladder: &str, run: u32, status: &str) -> RunRecord {
        RunRecord {
            agent_id: agent.to_string(),
            ladder: ladder.to_string(),
            run,
            status: status.to_string(),
            branch: None,
            error: None,
            traceback: None,
            file_timestamp: None,
            logs: None,
            commit_url: None,
        }
    }

    fn sample_state() -> DashboardState {
        DashboardState::new(
            vec![
                record("alpha", "easy", 1, "success"),
                record("alpha", "hard", 1, "failure"),
                record("beta", "easy", 1, "success"),
            ],
            "acme/bench-runs".to_string(),
        )
    }

    #[test]
    fn test_tabs_are_all_plus_unique_ladders() {
        let state = sample_state();
        assert_eq!(state.ladders, vec!["All", "easy", "hard"]);
    }

    #[test]
    fn test_all_tab_shows_everything() {
        let state = sample_state();
        assert_eq!(state.filtered_indices().len(), 3);
    }

    #[test]
    fn test_ladder_tab_filters() {
        let mut state = sample_state();
        state.next_tab(); // "easy"
        assert_eq!(state.filtered_indices(), vec![0, 2]);

        state.next_tab(); // "hard"
        assert_eq!(state.filtered_indices(), vec![1]);

        state.next_tab(); // wraps to "All"
        assert_eq!(state.selected_ladder, 0);
    }

    #[test]
    fn test_tab_change_resets_selection_and_collapse() {
        let mut state = sample_state();
        state.selected_index = 2;
        state.expanded = true;

        state.next_tab();
        assert_eq!(state.selected_index, 0);
        assert!(!state.expanded);
    }

    #[test]
    fn test_selection_clamps_to_filtered_list() {
        let mut state = sample_state();
        state.next_tab();
        state.next_tab(); // "hard": one record
        state.move_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_enter_toggles_detail() {
        let mut state = sample_state();
        assert_eq!(state.handle_key(KeyCode::Enter), InputOutcome::Continue);
        assert!(state.expanded);
        state.handle_key(KeyCode::Enter);
        assert!(!state.expanded);
    }

    #[test]
    fn test_escape_collapses_then_quits() {
        let mut state = sample_state();
        state.expanded = true;
        assert_eq!(state.handle_key(KeyCode::Esc), InputOutcome::Continue);
        assert!(!state.expanded);
        assert_eq!(state.handle_key(KeyCode::Esc), InputOutcome::QuitGame);
    }

    #[test]
    fn test_selected_record_follows_filter() {
        let mut state = sample_state();
        state.next_tab(); // "easy"
        state.move_down();
        let record = state.selected_record().expect("record selected");
        assert_eq!(record.agent_id, "beta");
    }

    #[test]
    fn test_strip_shows_overall_rates_on_all_tab() {
        let state = sample_state();
        let strip = state.strip_summaries();
        assert_eq!(strip.len(), 2);
        assert_eq!(strip[0].agent_id, "alpha");
        assert!((strip[0].rate - 0.5).abs() < 1e-9);
        assert_eq!(strip[1].agent_id, "beta");
        assert!((strip[1].rate - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_strip_scopes_rates_to_selected_ladder() {
        let mut state = sample_state();
        state.next_tab(); // "easy"
        let strip = state.strip_summaries();
        assert_eq!(strip.len(), 2);
        assert!((strip[0].rate - 1.0).abs() < 1e-9);
        assert!((strip[1].rate - 1.0).abs() < 1e-9);

        state.next_tab(); // "hard": only alpha ran, and it failed
        let strip = state.strip_summaries();
        assert_eq!(strip.len(), 1);
        assert_eq!(strip[0].agent_id, "alpha");
        assert_eq!(strip[0].total, 1);
        assert_eq!(strip[0].rate, 0.0);
    }

    #[test]
    fn test_code_link_prefers_recorded_commit_url() {
        let mut r = record("alpha", "easy", 1, "success");
        r.branch = Some("runs__wave-1".to_string());
        r.commit_url = Some("https://github.com/acme/bench-runs/commit/abc1234".to_string());
        assert_eq!(
            code_link(&r, "acme/bench-runs").as_deref(),
            Some("https://github.com/acme/bench-runs/commit/abc1234")
        );
    }

    #[test]
    fn test_code_link_falls_back_to_branch_tree() {
        let mut r = record("alpha", "easy", 1, "success");
        r.branch = Some("runs__wave-1".to_string());
        r.commit_url = Some("nan".to_string()); // NaN hole counts as absent
        assert_eq!(
            code_link(&r, "acme/bench-runs"),
            Some(branch_tree_url("acme/bench-runs", "runs__wave-1"))
        );

        r.branch = None;
        assert!(code_link(&r, "acme/bench-runs").is_none());
    }

    #[test]
    fn test_empty_dashboard_has_only_all_tab() {
        let state = DashboardState::new(Vec::new(), "acme/bench-runs".to_string());
        assert_eq!(state.ladders, vec!["All"]);
        assert!(state.filtered_indices().is_empty());
        assert!(state.selected_record().is_none());
    }
}
