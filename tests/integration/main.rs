mod helpers;
mod test_form_flows;
