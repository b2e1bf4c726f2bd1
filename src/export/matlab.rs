// src/export/matlab.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::entry::TimeEntry;
use crate::ui::messages::info;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Export a self-contained MATLAB analysis script: data arrays relative
/// to the first arrival, a per-customer table, aggregate statistics and
/// four plots.
pub(crate) fn export_matlab(entries: &[TimeEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to MATLAB: {}", path.display()));

    let script = build_script(entries);
    fs::write(path, script)?;

    notify_export_success("MATLAB", path);
    Ok(())
}

/// One relative-seconds value with two decimals; absent stamps become
/// NaN so the script can branch on incomplete rows.
fn rel_secs(ts: Option<i64>, t0: i64) -> String {
    match ts {
        Some(v) => format!("{:.2}", (v - t0) as f64 / 1000.0),
        None => "NaN".to_string(),
    }
}

fn column(values: impl Iterator<Item = Option<i64>>, t0: i64) -> String {
    values
        .map(|v| rel_secs(v, t0))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Generate the script text. All times are seconds relative to the
/// first entry's arrival (t = 0). The caller guards against an empty
/// collection.
pub fn build_script(entries: &[TimeEntry]) -> String {
    let t0 = entries[0].arrival;
    let n = entries.len();

    let arrival = column(entries.iter().map(|e| Some(e.arrival)), t0);
    let start = column(entries.iter().map(|e| e.start), t0);
    let finish = column(entries.iter().map(|e| e.end), t0);

    let generated = Local::now().format("%m/%d/%Y %I:%M:%S %p");

    format!(
        r#"% --- Customer Service System Analysis ---
% Generated on {generated}
% All times are in SECONDS relative to the first customer arrival (t=0)
clc; clear;

% Hardcoded data from Time Tracking System
% Customer Data: All times in seconds from first arrival

% Number of customers
n = {n};

% Time data in seconds (relative to first arrival at t=0)
arrival = [{arrival}];
start = [{start}];
finish = [{finish}];

% Compute system metrics
service_time = finish - start;
inter_arrival = [0; diff(arrival)];
wait_time = start - arrival;
total_time = finish - arrival;

% Display Results
fprintf('Customer Service System Data (Times in seconds from t=0):\n');
fprintf('=============================================================================\n');
fprintf('Customer\tArrival(s)\tStart(s)\tEnd(s)\t\tWait(s)\t\tService(s)\tTotal(s)\n');
fprintf('=============================================================================\n');
for i = 1:n
    if isnan(start(i))
        fprintf('%d\t\t%.2f\t\t--\t\t--\t\t--\t\t--\t\t--\n', i, arrival(i));
    elseif isnan(finish(i))
        fprintf('%d\t\t%.2f\t\t%.2f\t\t--\t\t%.2f\t\t--\t\t--\n', ...
            i, arrival(i), start(i), wait_time(i));
    else
        fprintf('%d\t\t%.2f\t\t%.2f\t\t%.2f\t\t%.2f\t\t%.2f\t\t%.2f\n', ...
            i, arrival(i), start(i), finish(i), wait_time(i), service_time(i), total_time(i));
    end
end

% --- Statistical Analysis ---
% Filter out incomplete entries (NaN values)
valid_idx = ~isnan(service_time);
valid_service = service_time(valid_idx);
valid_wait = wait_time(valid_idx);
valid_total = total_time(valid_idx);

fprintf('\n--- Analysis of the Customer Service System ---\n');
fprintf('================================================\n');

if sum(valid_idx) > 0
    avg_time_system = mean(valid_total);
    avg_waiting_time = mean(valid_wait);
    avg_service_time = mean(valid_service);
    prob_wait = sum(valid_wait > 0) / length(valid_wait);

    % Calculate utilization (ratio of total service time to total elapsed time)
    if finish(end) > arrival(1)
        utilization = sum(valid_service) / (finish(end) - arrival(1));
    else
        utilization = 0;
    end

    max_wait = max(valid_wait);
    min_wait = min(valid_wait);
    total_service_time = sum(valid_service);

    fprintf('Total Customers Processed: %d\n', sum(valid_idx));
    fprintf('Average Time in System: %.3f sec (%.2f min)\n', avg_time_system, avg_time_system/60);
    fprintf('Average Waiting Time: %.3f sec (%.2f min)\n', avg_waiting_time, avg_waiting_time/60);
    fprintf('Average Service Time: %.3f sec (%.2f min)\n', avg_service_time, avg_service_time/60);
    fprintf('Probability of Waiting: %.2f (%.1f%%)\n', prob_wait, prob_wait*100);
    fprintf('Server Utilization: %.4f (%.2f%%)\n', utilization, utilization*100);
    fprintf('Maximum Waiting Time: %.2f sec (%.2f min)\n', max_wait, max_wait/60);
    fprintf('Minimum Waiting Time: %.2f sec\n', min_wait);
    fprintf('Total Service Time: %.2f sec (%.2f min)\n', total_service_time, total_service_time/60);

    % --- Visualization ---
    figure('Name', 'Customer Service System Analysis', 'NumberTitle', 'off');

    % Plot 1: Wait Time per Customer
    subplot(2, 2, 1);
    bar(find(valid_idx), valid_wait);
    xlabel('Customer Number');
    ylabel('Wait Time (seconds)');
    title('Wait Time per Customer');
    grid on;

    % Plot 2: Service Time per Customer
    subplot(2, 2, 2);
    bar(find(valid_idx), valid_service);
    xlabel('Customer Number');
    ylabel('Service Time (seconds)');
    title('Service Time per Customer');
    grid on;

    % Plot 3: Total Time in System
    subplot(2, 2, 3);
    bar(find(valid_idx), valid_total);
    xlabel('Customer Number');
    ylabel('Total Time (seconds)');
    title('Total Time in System per Customer');
    grid on;

    % Plot 4: Timeline of Activities
    subplot(2, 2, 4);
    hold on;
    for i = find(valid_idx)'
        % Arrival to Start (waiting)
        plot([arrival(i), start(i)], [i, i], 'r-', 'LineWidth', 3);
        % Start to Finish (service)
        plot([start(i), finish(i)], [i, i], 'g-', 'LineWidth', 3);
    end
    xlabel('Time (seconds)');
    ylabel('Customer Number');
    title('Customer Timeline (Red=Wait, Green=Service)');
    legend('Waiting', 'Service');
    grid on;
    hold off;

else
    fprintf('No complete customer records found.\n');
end

fprintf('================================================\n');
fprintf('Analysis complete.\n');
"#
    )
}
