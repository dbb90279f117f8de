mod show_sample_diff;
