pub mod upload_sales_csv;
